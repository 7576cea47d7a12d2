use clap::Parser;
use data_encoding::HEXLOWER;
use ledger_address::cli::ClassArg;
use ledger_address::{
    generate_private, Address, AddressKind, AddressStore, Command, Opt, WalletClient,
    GLOBAL_CONFIG,
};
use log::{error, warn, LevelFilter};
use std::process;

fn main() {
    // RUST_LOG still overrides the Info default
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let opt = Opt::parse();
    if let Some(path) = opt.wallet {
        GLOBAL_CONFIG.set_wallet_path(path);
    }

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn parse_address(text: &str) -> Result<Address, Box<dyn std::error::Error>> {
    Address::parse_any(text).map_err(|e| {
        warn!("Rejected address {text}: {e}");
        format!("Invalid address: {e}").into()
    })
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Parse { address } => {
            let address = parse_address(&address)?;
            let kind = address.kind();
            println!("Kind: {kind} ({} {})", kind.polarity(), kind.class());
            println!("Payload: {}", HEXLOWER.encode(address.payload()));
            if address.is_private() {
                println!("Public: {}", address.public_address());
            }
        }
        Command::Public { address } => {
            let address = parse_address(&address)?;
            println!("{}", address.public_address());
        }
        Command::Generate {
            class: ClassArg(class),
            save,
        } => {
            let private = generate_private(AddressKind::private_of(class))?;
            if save {
                let store = AddressStore::open_default()?;
                private.save(&store)?;
            }
            println!("Private: {private}");
            println!("Public:  {}", private.public_address());
        }
        Command::Import { address } => {
            let address = parse_address(&address)?;
            let store = AddressStore::open_default()?;
            address.save(&store)?;
            println!("Saved {}", address.public_address());
        }
        Command::List { filter } => {
            let store = AddressStore::open_default()?;
            for address in store.list_addresses(filter)? {
                println!("{address}")
            }
        }
        Command::Private { address } => {
            let address = parse_address(&address)?;
            let store = AddressStore::open_default()?;
            println!("{}", address.private_address(&store)?);
        }
        Command::Remove { address } => {
            let address = parse_address(&address)?;
            let store = AddressStore::open_default()?;
            address.remove(&store)?;
            println!("Removed {}", address.public_address());
        }
    }
    Ok(())
}
