// Normative Type builders
//
// Each builder composes a canonical, versioned type definition from a small
// configuration. Member names and order inside every produced schema are a
// wire-compatibility contract shared with peer implementations of the
// protocol family, so the append sequences here are fixed.

pub use self::common::{Alarm, TimeStamp};
pub use self::enumerated::NTEnum;
pub use self::ndarray::NTNDArray;
pub use self::scalar::NTScalar;
pub use self::table::NTTable;
pub use self::uri::NTURI;

pub mod common;
pub mod enumerated;
pub mod ndarray;
pub mod scalar;
pub mod table;
pub mod uri;
