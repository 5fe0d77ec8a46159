//! Built-in sample reviews for a fictional smart speaker.

use deceptiscan::ScanResult;
use deceptiscan_report::ReviewRecord;

pub const SAMPLE_URL: &str = "https://www.example.com/product/123";
pub const SAMPLE_PRODUCT: &str = "Smart Home Assistant Pro";

/// (id, text, rating, author, date, verified)
const SAMPLES: &[(&str, &str, i64, &str, &str, bool)] = &[
    (
        "r1",
        "This product is absolutely amazing! I've been using it for a week and it has completely changed my life. I would recommend it to everyone!",
        5,
        "JohnDoe123",
        "2023-12-15",
        true,
    ),
    (
        "r2",
        "I cannot believe how incredible this product is. It's the best purchase I've ever made. Everyone needs to buy this right now!",
        5,
        "ReviewMaster42",
        "2023-12-10",
        false,
    ),
    (
        "r3",
        "The product works well for what I need. Battery life is good and the build quality is decent. Would have given 5 stars but the app is a bit buggy.",
        4,
        "TechUser2022",
        "2023-11-28",
        true,
    ),
    (
        "r4",
        "Absolutely terrible product. Broke after one day. Don't waste your money!",
        1,
        "AngryCustomer99",
        "2023-12-05",
        false,
    ),
    (
        "r5",
        "I've been using this product for about a month now. It has some pros and cons. The interface is intuitive and the performance is good, but I've noticed it gets hot when used for extended periods. Overall satisfied with the purchase.",
        4,
        "RealisticReviewer",
        "2023-11-15",
        true,
    ),
    (
        "r6",
        "This product is amazing! I've been using it for a week and it has completely changed my life. I would recommend it to everyone!",
        5,
        "SuspiciousUser123",
        "2023-12-14",
        false,
    ),
    (
        "r7",
        "Not worth the money. There are better alternatives available for less.",
        2,
        "ValueSeeker",
        "2023-10-30",
        true,
    ),
    (
        "r8",
        "I bought this product yesterday and I'm already in love with it! It's perfect in every way and worth every penny! Life-changing purchase!",
        5,
        "NewAccount2023",
        "2023-12-12",
        false,
    ),
];

pub fn sample_records() -> ScanResult<Vec<ReviewRecord>> {
    SAMPLES
        .iter()
        .map(|&(id, text, rating, author, date, verified)| {
            Ok(ReviewRecord::new(id, text, Some(rating))?
                .with_author(author)
                .with_date(date)
                .verified(verified))
        })
        .collect()
}
