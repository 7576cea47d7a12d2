use crate::address::{Address, AddressClass, AddressKind, Polarity};
use crate::error::Result;
use std::fmt;
use std::str::FromStr;

/// Which addresses a listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFilter {
    All,
    Public,
    Private,
    Ledger,
    Credit,
    Kind(AddressKind),
}

impl AddressFilter {
    pub fn matches(&self, address: &Address) -> bool {
        let kind = address.kind();
        match self {
            AddressFilter::All => true,
            AddressFilter::Public => kind.polarity() == Polarity::Public,
            AddressFilter::Private => kind.polarity() == Polarity::Private,
            AddressFilter::Ledger => kind.class() == AddressClass::Ledger,
            AddressFilter::Credit => kind.class() == AddressClass::Credit,
            AddressFilter::Kind(want) => kind == *want,
        }
    }
}

impl FromStr for AddressFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => return Ok(AddressFilter::All),
            "public" => return Ok(AddressFilter::Public),
            "private" => return Ok(AddressFilter::Private),
            "ledger" => return Ok(AddressFilter::Ledger),
            "credit" => return Ok(AddressFilter::Credit),
            _ => {}
        }
        s.parse::<AddressKind>()
            .map(AddressFilter::Kind)
            .map_err(|_| {
                format!(
                    "Invalid filter: {s}. Valid options: all, public, private, ledger, credit, FA, Fs, EC, Es"
                )
            })
    }
}

impl fmt::Display for AddressFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFilter::All => write!(f, "all"),
            AddressFilter::Public => write!(f, "public"),
            AddressFilter::Private => write!(f, "private"),
            AddressFilter::Ledger => write!(f, "ledger"),
            AddressFilter::Credit => write!(f, "credit"),
            AddressFilter::Kind(kind) => write!(f, "{kind}"),
        }
    }
}

/// Key store that holds private seeds and known public addresses.
pub trait WalletClient {
    fn save(&self, address: &Address) -> Result<()>;

    fn remove(&self, address: &Address) -> Result<()>;

    fn list_addresses(&self, filter: AddressFilter) -> Result<Vec<Address>>;

    /// The private address whose public counterpart is `public`.
    fn fetch_private_counterpart(&self, public: &Address) -> Result<Address>;
}

/// Source of confirmed balances, typically a ledger node.
pub trait BalanceSource {
    fn fetch_balance(&self, address: &Address) -> Result<u64>;
}

impl Address {
    pub fn save<W: WalletClient + ?Sized>(&self, wallet: &W) -> Result<()> {
        wallet.save(self)
    }

    pub fn remove<W: WalletClient + ?Sized>(&self, wallet: &W) -> Result<()> {
        wallet.remove(self)
    }

    /// Private addresses return themselves without consulting the wallet.
    pub fn private_address<W: WalletClient + ?Sized>(&self, wallet: &W) -> Result<Address> {
        if self.is_private() {
            return Ok(*self);
        }
        wallet.fetch_private_counterpart(self)
    }

    /// Balances are tracked per public address, so private addresses query
    /// their counterpart.
    pub fn balance<B: BalanceSource + ?Sized>(&self, source: &B) -> Result<u64> {
        source.fetch_balance(&self.public_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;
    use crate::test_utils::{EC_ADDRESS, ES_ADDRESS, FA_ADDRESS, FS_ADDRESS};
    use std::collections::HashMap;

    struct FixedBalances(HashMap<Address, u64>);

    impl BalanceSource for FixedBalances {
        fn fetch_balance(&self, address: &Address) -> Result<u64> {
            if address.is_private() {
                return Err(AddressError::InvalidPrefix);
            }
            Ok(self.0.get(address).copied().unwrap_or(0))
        }
    }

    struct NoWallet;

    impl WalletClient for NoWallet {
        fn save(&self, _: &Address) -> Result<()> {
            Err(AddressError::Wallet("unavailable".to_string()))
        }
        fn remove(&self, _: &Address) -> Result<()> {
            Err(AddressError::Wallet("unavailable".to_string()))
        }
        fn list_addresses(&self, _: AddressFilter) -> Result<Vec<Address>> {
            Ok(vec![])
        }
        fn fetch_private_counterpart(&self, _: &Address) -> Result<Address> {
            Err(AddressError::Wallet("unavailable".to_string()))
        }
    }

    #[test]
    fn test_filter_matches() {
        let fa = Address::parse_any(FA_ADDRESS).unwrap();
        let fs = Address::parse_any(FS_ADDRESS).unwrap();
        let ec = Address::parse_any(EC_ADDRESS).unwrap();
        let es = Address::parse_any(ES_ADDRESS).unwrap();

        assert!([fa, fs, ec, es].iter().all(|a| AddressFilter::All.matches(a)));
        assert!(AddressFilter::Public.matches(&fa) && AddressFilter::Public.matches(&ec));
        assert!(!AddressFilter::Public.matches(&fs));
        assert!(AddressFilter::Private.matches(&es));
        assert!(AddressFilter::Ledger.matches(&fs) && !AddressFilter::Ledger.matches(&ec));
        assert!(AddressFilter::Credit.matches(&es) && !AddressFilter::Credit.matches(&fa));
        assert!(AddressFilter::Kind(AddressKind::PublicCredit).matches(&ec));
        assert!(!AddressFilter::Kind(AddressKind::PublicCredit).matches(&es));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("Private".parse::<AddressFilter>().unwrap(), AddressFilter::Private);
        assert_eq!(
            "Es".parse::<AddressFilter>().unwrap(),
            AddressFilter::Kind(AddressKind::PrivateCreditSeed)
        );
        assert!("bogus".parse::<AddressFilter>().is_err());
    }

    #[test]
    fn test_private_address_skips_wallet_for_private() {
        let fs = Address::parse_any(FS_ADDRESS).unwrap();
        assert_eq!(fs.private_address(&NoWallet).unwrap(), fs);
        let fa = fs.public_address();
        assert!(fa.private_address(&NoWallet).is_err());
    }

    #[test]
    fn test_balance_uses_public_counterpart() {
        let es = Address::parse_any(ES_ADDRESS).unwrap();
        let ec = Address::parse_any(EC_ADDRESS).unwrap();
        let fa = Address::parse_any(FA_ADDRESS).unwrap();
        let source = FixedBalances(HashMap::from([(ec, 250)]));

        assert_eq!(ec.balance(&source).unwrap(), 250);
        assert_eq!(es.balance(&source).unwrap(), 250);
        assert_eq!(fa.balance(&source).unwrap(), 0);
    }
}
