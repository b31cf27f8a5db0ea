//! GraphQL documents sent to the AMM subgraph.

/// All pairs, bounded by `$limit`.
pub const ALL_PAIRS: &str = r#"
  query allPairs($limit: Int!) {
    pairs(first: $limit) {
      id
      token0
      token1
    }
  }
"#;

/// Candles of one pair and period inside `[$from, $to]`, ascending by time.
pub const CANDLES: &str = r#"
  query candles(
    $period: Int!
    $from: Int!
    $to: Int!
    $token0: String!
    $token1: String!
    $limit: Int!
  ) {
    candles(
      first: $limit
      orderBy: time
      orderDirection: asc
      where: {
        period: $period
        token0: $token0
        token1: $token1
        time_gte: $from
        time_lte: $to
      }
    ) {
      id
      time
      open
      close
      low
      high
      token1TotalAmount
    }
  }
"#;

/// Transactions touching a pair, newest first, paged by `$skip`/`$limit`.
pub const TRANSACTIONS: &str = r#"
  query transactions($pair: String!, $skip: Int!, $limit: Int!) {
    transactions(
      first: $limit
      skip: $skip
      orderBy: timestamp
      orderDirection: desc
      where: { swaps_: { pair: $pair } }
    ) {
      id
      timestamp
      swaps {
        amount0In
        amount0Out
        amount1In
        amount1Out
        pair {
          id
          token0
          token1
        }
      }
    }
  }
"#;

/// Pairs made of two tokens, in either order.
pub const PAIRS_BY_TOKENS: &str = r#"
  query pairsByTokens($token0: String!, $token1: String!) {
    pairs(
      first: 1
      where: {
        or: [
          { token0: $token0, token1: $token1 }
          { token0: $token1, token1: $token0 }
        ]
      }
    ) {
      id
      token0
      token1
    }
  }
"#;

/// Operation name of a document (`query allPairs(...)` -> `allPairs`).
pub fn operation_name(document: &str) -> &str {
    let rest = document
        .trim_start()
        .strip_prefix("query")
        .map(str::trim_start)
        .unwrap_or("");
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 {
        "anonymous"
    } else {
        &rest[..end]
    }
}
