use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
    Btc,
    Eth,
    Usdt,
    Love,
}

impl Currency {
    pub const ALL: [Currency; 7] = [
        Currency::Rub,
        Currency::Usd,
        Currency::Eur,
        Currency::Btc,
        Currency::Eth,
        Currency::Usdt,
        Currency::Love,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Rub => "₽",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Btc => "₿",
            Currency::Eth => "Ξ",
            Currency::Usdt => "₮",
            Currency::Love => "♥",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: Currency,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub balances: Vec<WalletBalance>,
}

impl Default for Wallet {
    /// Zero balance in every supported currency
    fn default() -> Self {
        Self {
            balances: Currency::ALL
                .iter()
                .map(|&currency| WalletBalance {
                    currency,
                    amount: 0.0,
                })
                .collect(),
        }
    }
}

impl Wallet {
    pub fn balance(&self, currency: Currency) -> f64 {
        self.balances
            .iter()
            .find(|b| b.currency == currency)
            .map(|b| b.amount)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Payment,
    Referral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: u64,
    pub kind: TransactionKind,
    pub currency: Currency,
    pub amount: f64,
    pub at: DateTime<Utc>,
}
