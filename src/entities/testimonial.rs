// 💬 Testimonial Entity - Resident quotes shown in the rotating carousel

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    pub residence: String,
    pub quote: String,
}

pub fn default_testimonials() -> Vec<Testimonial> {
    [
        ("t-1", "Margaret H.", "Tower 2 resident", "We sold the house and never looked back. The staff knows us by name."),
        ("t-2", "David and Lin C.", "Tower 4 penthouse", "The views over the Strip at night still stop our guests mid-sentence."),
        ("t-3", "Robert K.", "Tower 1 resident", "Lock the door, get on a plane, and everything is looked after."),
        ("t-4", "Alicia M.", "Tower 3 resident", "The club is our second living room. The pool deck is the best in the city."),
        ("t-5", "James W.", "Tower 3 resident", "Security and privacy without feeling shut away from the city."),
    ]
    .into_iter()
    .map(|(id, author, residence, quote)| Testimonial {
        id: id.to_string(),
        author: author.to_string(),
        residence: residence.to_string(),
        quote: quote.to_string(),
    })
    .collect()
}
