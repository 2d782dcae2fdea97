// Inspector for the canonical Normative Type schemas
//
// Prints the composed type tree for a chosen Normative Type, or a defaulted
// instance rendered as JSON.

use clap::{Parser, ValueEnum};

use ntvalue::nt::{NTEnum, NTNDArray, NTScalar, NTTable, NTURI};
use ntvalue::typedef::{members, TypeCode, TypeDef};
use ntvalue::value::json::value_to_json;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NormativeType {
    Scalar,
    Enum,
    Table,
    Ndarray,
    Uri,
}

#[derive(Parser)]
#[command(name = "ntvalue-inspector", about = "Print canonical Normative Type schemas")]
struct Args {
    /// Which Normative Type to inspect
    #[arg(value_enum)]
    r#type: NormativeType,

    /// Use an array value member (scalar type only)
    #[arg(long)]
    array: bool,

    /// Include the display substructure (scalar type only)
    #[arg(long)]
    display: bool,

    /// Include the control substructure (scalar type only)
    #[arg(long)]
    control: bool,

    /// Include the valueAlarm substructure (scalar type only)
    #[arg(long)]
    value_alarm: bool,

    /// With --display, also include the precision/form block (scalar type only)
    #[arg(long)]
    form: bool,

    /// Print a defaulted instance as JSON instead of the type tree
    #[arg(long)]
    json: bool,
}

fn compose(args: &Args) -> ntvalue::Result<TypeDef> {
    let def = match args.r#type {
        NormativeType::Scalar => {
            let mut builder = NTScalar::new(if args.array {
                TypeCode::Float64Array
            } else {
                TypeCode::Float64
            });
            builder.display = args.display;
            builder.control = args.control;
            builder.value_alarm = args.value_alarm;
            builder.form = args.form;
            builder.build()?
        }
        NormativeType::Enum => NTEnum.build(),
        NormativeType::Table => {
            // A representative two-column table
            let mut table = NTTable::new();
            table
                .add_column(TypeCode::Int32, "index", None)?
                .add_column(TypeCode::Float64, "reading", Some("Reading"))?;
            table.build()
        }
        NormativeType::Ndarray => NTNDArray.build(),
        NormativeType::Uri => {
            NTURI::new(vec![members::string("pvname"), members::float64("timeout")])
                .type_def()
                .clone()
        }
    };
    Ok(def)
}

fn main() -> ntvalue::Result<()> {
    let args = Args::parse();
    let def = compose(&args)?;

    if args.json {
        let instance = def.create()?;
        println!("{:#}", value_to_json(&instance));
    } else {
        println!("{}", def);
    }
    Ok(())
}
