//! Lowest-cost path queries.

use crate::error::Result;
use crate::geometry::SolverCell;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Raw answer of the path solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Route tokens in travel order, e.g. `cel(2,3)`, `cor(f1,f2)`, `ele(f2,f3)`.
    pub path: Vec<String>,
    pub cost: f64,
}

/// Gateway to the solver's lowest-cost path endpoint.
#[async_trait]
pub trait PathGateway: Send + Sync {
    /// Asks the solver for the cheapest route between two cells.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when the solver rejects the query
    /// - `Gateway` for any other non-success answer or transport failure
    async fn get_lowest_cost_path(
        &self,
        origin_floor_id: &str,
        origin_cell: SolverCell,
        destination_floor_id: &str,
        destination_cell: SolverCell,
    ) -> Result<PathResult>;
}

/// One step of a solver route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteToken {
    /// A grid cell; the coordinates are kept exactly as the solver wrote them.
    Cell(String),
    /// A passage between two floors of adjacent buildings.
    Corridor { from: String, to: String },
    /// An elevator ride between two floors.
    Elevator { from: String, to: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTokenError {
    #[error("unknown route token kind '{0}'")]
    UnknownKind(String),
    #[error("malformed route token '{0}'")]
    Malformed(String),
}

impl FromStr for RouteToken {
    type Err = RouteTokenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let token = s.trim();
        let (kind, rest) = token
            .split_once('(')
            .ok_or_else(|| RouteTokenError::Malformed(token.to_string()))?;
        let args = rest
            .strip_suffix(')')
            .ok_or_else(|| RouteTokenError::Malformed(token.to_string()))?;

        match kind.trim() {
            "cel" => Ok(RouteToken::Cell(args.to_string())),
            "cor" => {
                let (from, to) = floor_pair(token, args)?;
                Ok(RouteToken::Corridor { from, to })
            }
            "ele" => {
                let (from, to) = floor_pair(token, args)?;
                Ok(RouteToken::Elevator { from, to })
            }
            other => Err(RouteTokenError::UnknownKind(other.to_string())),
        }
    }
}

fn floor_pair(token: &str, args: &str) -> std::result::Result<(String, String), RouteTokenError> {
    let (from, to) = args
        .split_once(',')
        .ok_or_else(|| RouteTokenError::Malformed(token.to_string()))?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(RouteTokenError::Malformed(token.to_string()));
    }
    Ok((from.to_string(), to.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_keeps_coordinates_verbatim() {
        assert_eq!(
            "cel(2,3)".parse::<RouteToken>().unwrap(),
            RouteToken::Cell("2,3".to_string())
        );
    }

    #[test]
    fn test_parse_corridor_and_elevator() {
        assert_eq!(
            "cor(f1, f2)".parse::<RouteToken>().unwrap(),
            RouteToken::Corridor {
                from: "f1".to_string(),
                to: "f2".to_string()
            }
        );
        assert_eq!(
            "ele(f2,f3)".parse::<RouteToken>().unwrap(),
            RouteToken::Elevator {
                from: "f2".to_string(),
                to: "f3".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(
            "xyz(1,2)".parse::<RouteToken>().unwrap_err(),
            RouteTokenError::UnknownKind("xyz".to_string())
        );
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(matches!(
            "cel".parse::<RouteToken>(),
            Err(RouteTokenError::Malformed(_))
        ));
        assert!(matches!(
            "cor(f1)".parse::<RouteToken>(),
            Err(RouteTokenError::Malformed(_))
        ));
        assert!(matches!(
            "ele(f1,f2".parse::<RouteToken>(),
            Err(RouteTokenError::Malformed(_))
        ));
    }
}
