// src/config.rs
use crate::args::{Args, Command};
use crate::options::{self, OutputFormat};
use typed_read_domain::{ReaderConfig, ReaderConfigBuilder};
use typed_read_shared_kernel::{
    Length, LockOperation, PresentationError, Result, StreamName, TypedReadError,
};

/// What a single CLI run reads, after validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Eof,
    Read(Length),
    String(Length),
    Char,
    Bool,
    Int(Length),
    Float(Length),
    Line,
    Lines,
    All { offset: u64 },
    Scan { format: String, all: bool },
    Array { format: String },
}

/// Fully resolved CLI invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub name: StreamName,
    pub reader: ReaderConfig,
    pub action: Action,
    pub command: &'static str,
    pub format: OutputFormat,
}

impl TryFrom<Args> for Invocation {
    type Error = TypedReadError;

    fn try_from(args: Args) -> Result<Self> {
        let command = args.command.name();
        let action = Action::try_from(args.command)?;
        let reader = reader_config_from_args(&args.open)?;

        Ok(Self {
            name: StreamName::from(args.file),
            reader,
            action,
            command,
            format: args.output.format,
        })
    }
}

impl TryFrom<Command> for Action {
    type Error = TypedReadError;

    fn try_from(command: Command) -> Result<Self> {
        Ok(match command {
            Command::Eof => Self::Eof,
            Command::Read { length } => Self::Read(Length::new(length)?),
            Command::String { length } => Self::String(Length::new(length)?),
            Command::Char => Self::Char,
            Command::Bool => Self::Bool,
            Command::Int { length } => Self::Int(Length::new(length)?),
            Command::Float { length } => Self::Float(Length::new(length)?),
            Command::Line => Self::Line,
            Command::Lines => Self::Lines,
            Command::All { offset } => Self::All { offset },
            Command::Scan { format, all } => Self::Scan { format, all },
            Command::Array { format } => Self::Array { format },
        })
    }
}

fn reader_config_from_args(opts: &crate::args::OpenOptions) -> Result<ReaderConfig> {
    let mut builder = ReaderConfigBuilder::default();
    builder
        .mode(opts.mode)
        .defer_open(opts.defer)
        .blocking_lock(!opts.no_wait);
    if let Some(lock) = opts.lock {
        builder.lock(LockOperation::from(lock));
    }
    if let Some(size) = opts.buffer {
        builder.buffer_capacity(size.0);
    }
    builder
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
}

// From trait implementations for CLI -> shared enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::LockArg, LockOperation, Shared, Exclusive);

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use typed_read_shared_kernel::{DomainError, OpenMode};

    fn parse(argv: &[&str]) -> Result<Invocation> {
        Invocation::try_from(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults() {
        let inv = parse(&["typed_read", "data.txt", "line"]).unwrap();
        assert_eq!(inv.name.as_str(), "data.txt");
        assert_eq!(inv.action, Action::Line);
        assert_eq!(inv.command, "line");
        assert_eq!(inv.reader, ReaderConfig::default());
        assert_eq!(inv.format, OutputFormat::Text);
    }

    #[test]
    fn open_options_flow_into_reader_config() {
        let inv = parse(&[
            "typed_read",
            "--defer",
            "--lock",
            "shared",
            "--no-wait",
            "--buffer",
            "4K",
            "data.txt",
            "int",
            "3",
        ])
        .unwrap();
        assert!(inv.reader.defer_open);
        assert_eq!(inv.reader.lock, Some(LockOperation::Shared));
        assert!(!inv.reader.blocking_lock);
        assert_eq!(inv.reader.buffer_capacity, 4096);
        assert_eq!(inv.action, Action::Int(Length::from(3usize)));
    }

    #[test]
    fn mode_is_parsed_but_not_validated_here() {
        let inv = parse(&["typed_read", "--mode", "w+", "data.txt", "eof"]).unwrap();
        assert_eq!(inv.reader.mode, OpenMode::TruncateReadWrite);
    }

    #[test]
    fn negative_length_is_a_domain_error() {
        let err = parse(&["typed_read", "data.txt", "read", "-4"]).unwrap_err();
        assert!(matches!(
            err,
            TypedReadError::Domain(DomainError::NegativeLength { given: -4 })
        ));
        assert_eq!(err.code(), 2);
    }

    #[test]
    fn int_length_defaults_to_one() {
        let inv = parse(&["typed_read", "data.txt", "int"]).unwrap();
        assert_eq!(inv.action, Action::Int(Length::ONE));
    }
}
