use crate::address::AddressClass;
use crate::wallet::AddressFilter;
use clap::{Parser, Subcommand};
use std::str::FromStr;

/// Address class argument for key generation
#[derive(Debug, Clone, Copy)]
pub struct ClassArg(pub AddressClass);

impl FromStr for ClassArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ledger" | "fs" | "fa" => Ok(ClassArg(AddressClass::Ledger)),
            "credit" | "es" | "ec" => Ok(ClassArg(AddressClass::Credit)),
            _ => Err(format!(
                "Invalid address class: {s}. Valid options: ledger, credit"
            )),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ledger-address")]
pub struct Opt {
    #[arg(
        long = "wallet",
        global = true,
        help = "Path of the local address store (overrides WALLET_DB_PATH)"
    )]
    pub wallet: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "parse", about = "Validate an address and show its contents")]
    Parse {
        #[arg(help = "The address to parse")]
        address: String,
    },
    #[command(name = "public", about = "Print the public address of any address")]
    Public {
        #[arg(help = "A private or public address")]
        address: String,
    },
    #[command(name = "generate", about = "Generate a new private address")]
    Generate {
        #[arg(help = "Address class (ledger, credit)")]
        class: ClassArg,
        #[arg(long = "save", help = "Store the new address in the local wallet")]
        save: bool,
    },
    #[command(name = "import", about = "Save an address in the local wallet")]
    Import {
        #[arg(help = "The address to save")]
        address: String,
    },
    #[command(name = "list", about = "Print local wallet addresses")]
    List {
        #[arg(
            long = "filter",
            default_value = "all",
            help = "all, public, private, ledger, credit, FA, Fs, EC or Es"
        )]
        filter: AddressFilter,
    },
    #[command(name = "private", about = "Look up the private address for a public one")]
    Private {
        #[arg(help = "The public address")]
        address: String,
    },
    #[command(name = "remove", about = "Remove an address from the local wallet")]
    Remove {
        #[arg(help = "The address to remove")]
        address: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_command() {
        let opt = Opt::try_parse_from(["ledger-address", "generate", "credit", "--save"]).unwrap();
        match opt.command {
            Command::Generate { class, save } => {
                assert_eq!(class.0, AddressClass::Credit);
                assert!(save);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_list_filter_and_wallet_flag() {
        let opt = Opt::try_parse_from([
            "ledger-address",
            "list",
            "--filter",
            "EC",
            "--wallet",
            "/tmp/w",
        ])
        .unwrap();
        assert_eq!(opt.wallet.as_deref(), Some("/tmp/w"));
        assert!(matches!(
            opt.command,
            Command::List {
                filter: AddressFilter::Kind(_)
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_class() {
        assert!(Opt::try_parse_from(["ledger-address", "generate", "gold"]).is_err());
    }
}
