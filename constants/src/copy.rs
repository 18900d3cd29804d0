/// Built-in marketing copy, used until the copy asset loads.
pub const DEFAULT_TITLE: &str = "Nike Air Force 1";

pub const DEFAULT_LEAD: &str = "The Nike Air Force 1 is a basketball classic turned streetwear staple. \
Designed with timeless style and comfort, it features durable leather and responsive cushioning. \
Step into iconic heritage with a silhouette that continues to inspire.";

pub const DEFAULT_PARAGRAPHS: &[&str] = &[
    "Released in 1982, the Air Force 1 was the first basketball shoe to use Nike Air technology, \
revolutionizing performance and setting a new standard in sneaker culture. Today, it stands as a \
symbol of self-expression across generations.",
    "Available in countless colorways and collaborations, the AF1 remains a favorite among \
sneakerheads, athletes, and artists worldwide.",
];
