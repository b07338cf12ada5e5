use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::stock::{Stock, StockRepo};
use crate::user::{User, UserId, UserRepo};

#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateUser(UserId),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "Failed to read data file: {e}"),
            DataError::Json(e) => write!(f, "Malformed data: {e}"),
            DataError::DuplicateUser(id) => write!(f, "Duplicate user identifier: {id}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            DataError::Json(e) => Some(e),
            DataError::DuplicateUser(_) => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(error: std::io::Error) -> Self {
        DataError::Io(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        DataError::Json(error)
    }
}

/// Builds the user collection, keeping source order.
/// # Errors
/// - `DataError::DuplicateUser` if two records share an identifier
pub fn users_from_records(records: Vec<User>) -> Result<UserRepo, DataError> {
    let mut repo = UserRepo::new();
    for user in records {
        if repo.contains(&user.id) {
            return Err(DataError::DuplicateUser(user.id));
        }
        repo.insert(user.id.clone(), user);
    }
    Ok(repo)
}

/// Builds the stock collection. When a symbol repeats, the first record wins.
#[must_use]
pub fn stocks_from_records(records: Vec<Stock>) -> StockRepo {
    let mut repo = StockRepo::new();
    for stock in records {
        if repo.contains(&stock.symbol) {
            debug!("Ignoring repeated stock symbol {}", stock.symbol);
            continue;
        }
        repo.insert(stock.symbol.clone(), stock);
    }
    repo
}

/// Parses a JSON array of user records.
/// # Errors
/// - `DataError::Json` if the input is not a valid users array
/// - `DataError::DuplicateUser` if two records share an identifier
pub fn parse_users(json: &str) -> Result<UserRepo, DataError> {
    let records: Vec<User> = serde_json::from_str(json)?;
    users_from_records(records)
}

/// Parses a JSON array of stock records.
/// # Errors
/// - `DataError::Json` if the input is not a valid stocks array
pub fn parse_stocks(json: &str) -> Result<StockRepo, DataError> {
    let records: Vec<Stock> = serde_json::from_str(json)?;
    Ok(stocks_from_records(records))
}

/// Reads and parses the users file.
/// # Errors
/// - Returns `DataError` if the file cannot be read or parsed
pub fn load_users(path: &Path) -> Result<UserRepo, DataError> {
    let users = parse_users(&fs::read_to_string(path)?)?;
    info!("Loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// Reads and parses the stocks file.
/// # Errors
/// - Returns `DataError` if the file cannot be read or parsed
pub fn load_stocks(path: &Path) -> Result<StockRepo, DataError> {
    let stocks = parse_stocks(&fs::read_to_string(path)?)?;
    info!("Loaded {} stocks from {}", stocks.len(), path.display());
    Ok(stocks)
}
