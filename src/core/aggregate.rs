use crate::domain::model::{HouseScore, Member};
use std::collections::HashMap;

/// Groups scored members by house and ranks houses ascending by mean
/// polarity. Grouping preserves first-seen house order so the sort is
/// deterministic on ties; houses with no scored members are skipped.
pub fn rank_houses(members: &[Member]) -> Vec<HouseScore> {
    let mut grouped: HashMap<&str, Vec<f64>> = HashMap::new();
    let mut house_order: Vec<&str> = Vec::new();

    for member in members {
        let slot = grouped.entry(member.house.as_str()).or_insert_with(|| {
            house_order.push(member.house.as_str());
            Vec::new()
        });
        slot.push(member.polarity);
    }

    let mut scores: Vec<HouseScore> = house_order
        .into_iter()
        .filter_map(|house| {
            let polarities = &grouped[house];
            if polarities.is_empty() {
                return None;
            }
            let average = polarities.iter().sum::<f64>() / polarities.len() as f64;
            Some(HouseScore {
                house: house.to_string(),
                average_polarity: average,
            })
        })
        .collect();

    scores.sort_by(|a, b| {
        a.average_polarity
            .partial_cmp(&b.average_polarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scores
}
