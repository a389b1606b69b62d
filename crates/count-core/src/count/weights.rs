use crate::count::error::CountError;
use crate::model::rank::Rank;

pub fn weight_of(rank: Rank) -> i32 {
    rank.weight()
}

/// Weight of a raw rank number, rejecting anything outside 1..=13.
pub fn weight_of_value(value: i64) -> Result<i32, CountError> {
    Rank::try_from(value).map(weight_of)
}

/// Legend of the Hi-Lo weight table, grouped by weight.
pub fn card_layout() -> String {
    let mut out = String::from("Card Layout:");
    for (label, weight) in [("+1", 1), ("0", 0), ("-1", -1)] {
        let members: Vec<String> = Rank::ORDERED
            .iter()
            .copied()
            .filter(|rank| rank.weight() == weight)
            .map(|rank| match rank.face_name() {
                Some(name) => format!("{} ({name})", rank.value()),
                None => rank.value().to_string(),
            })
            .collect();
        out.push_str(&format!("\n  {label:>2}: {}", members.join(", ")));
    }
    out
}
