use serde::{Deserialize, Serialize};

/// A house as returned by the houses endpoint: a slug plus member stubs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    pub slug: String,
    pub members: Vec<MemberStub>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberStub {
    pub slug: String,
}

/// A fully resolved member: quote fetched and sanitized, polarity scored.
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub house: String,
    pub slug: String,
    pub quote: String,
    pub polarity: f64,
}

/// One row of the final ranking. Only exists after aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseScore {
    pub house: String,
    pub average_polarity: f64,
}
