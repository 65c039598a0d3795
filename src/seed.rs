// 🌱 Seed Data - Downtown Pleasanton businesses loaded at startup

use crate::entities::{Hours, NewBusiness, NewReview};
use crate::repository::BusinessRepository;

/// Load the fixed seed set into `repository`
///
/// Businesses get ids 1..=6 on an empty repository; the seed reviews
/// reference those ids.
pub fn load(repository: &mut BusinessRepository) {
    for business in businesses() {
        repository.create(business);
    }
    for review in reviews() {
        repository.create_review(review);
    }
}

/// Build a weekly hours map, Monday first
fn week(days: [&str; 7]) -> Hours {
    const NAMES: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    NAMES
        .iter()
        .zip(days)
        .map(|(name, hours)| (name.to_string(), hours.to_string()))
        .collect()
}

fn photo(id: &str) -> String {
    format!("https://images.unsplash.com/{id}?w=800&h=600&fit=crop")
}

fn photos(ids: &[&str]) -> Option<Vec<String>> {
    Some(ids.iter().map(|id| photo(id)).collect())
}

fn businesses() -> Vec<NewBusiness> {
    vec![
        NewBusiness {
            name: "Blue Agave Club".to_string(),
            category: "Restaurants".to_string(),
            description: "Upscale Mexican cuisine in a historic building with a lovely patio. \
                Known for their authentic flavors and craft margaritas."
                .to_string(),
            phone: Some("(925) 555-0123".to_string()),
            website: Some("https://blueagaveclub.com".to_string()),
            address: "123 Main St, Pleasanton, CA 94566".to_string(),
            latitude: 37.661871,
            longitude: -121.874397,
            hours: Some(week([
                "11:00 AM - 10:00 PM",
                "11:00 AM - 10:00 PM",
                "11:00 AM - 10:00 PM",
                "11:00 AM - 10:00 PM",
                "11:00 AM - 11:00 PM",
                "11:00 AM - 11:00 PM",
                "11:00 AM - 9:00 PM",
            ])),
            rating: Some(4.5),
            review_count: Some(127),
            is_open: Some(true),
            external_id: Some("blue-agave-club-pleasanton".to_string()),
            image_url: Some(photo("photo-1514933651103-005eec06c04b")),
            images: photos(&[
                "photo-1514933651103-005eec06c04b",
                "photo-1428515613728-6b4607e44363",
                "photo-1555396273-367ea4eb4db5",
            ]),
        },
        NewBusiness {
            name: "Inklings Coffee & Tea".to_string(),
            category: "Cafés".to_string(),
            description: "Charming coffee shop with rustic decor and a relaxed vibe. \
                Perfect for remote work and studying."
                .to_string(),
            phone: Some("(925) 555-0156".to_string()),
            website: Some("https://inklingscoffee.com".to_string()),
            address: "456 Main St, Pleasanton, CA 94566".to_string(),
            latitude: 37.661491,
            longitude: -121.874916,
            hours: Some(week([
                "6:00 AM - 8:00 PM",
                "6:00 AM - 8:00 PM",
                "6:00 AM - 8:00 PM",
                "6:00 AM - 8:00 PM",
                "6:00 AM - 9:00 PM",
                "7:00 AM - 9:00 PM",
                "7:00 AM - 7:00 PM",
            ])),
            rating: Some(4.2),
            review_count: Some(89),
            is_open: Some(true),
            external_id: Some("inklings-coffee-tea-pleasanton".to_string()),
            image_url: Some(photo("photo-1501339847302-ac426a4a7cbb")),
            images: photos(&[
                "photo-1501339847302-ac426a4a7cbb",
                "photo-1554118811-1e0d58224f24",
                "photo-1495474472287-4d71bcdd2085",
            ]),
        },
        NewBusiness {
            name: "Prim Boutique".to_string(),
            category: "Shopping".to_string(),
            description: "Trendy women's clothing boutique with curated fashion collections \
                and personal styling services."
                .to_string(),
            phone: Some("(925) 555-0178".to_string()),
            website: Some("https://primboutique.com".to_string()),
            address: "789 Main St, Pleasanton, CA 94566".to_string(),
            latitude: 37.661763,
            longitude: -121.875523,
            hours: Some(week([
                "10:00 AM - 7:00 PM",
                "10:00 AM - 7:00 PM",
                "10:00 AM - 7:00 PM",
                "10:00 AM - 7:00 PM",
                "10:00 AM - 8:00 PM",
                "10:00 AM - 8:00 PM",
                "11:00 AM - 6:00 PM",
            ])),
            rating: Some(4.8),
            review_count: Some(42),
            is_open: Some(false),
            external_id: Some("prim-boutique-pleasanton".to_string()),
            image_url: Some(photo("photo-1441986300917-64674bd600d8")),
            images: photos(&[
                "photo-1441986300917-64674bd600d8",
                "photo-1445205170230-053b83016050",
                "photo-1603400521630-9f2de124b33b",
            ]),
        },
        NewBusiness {
            name: "Museum on Main".to_string(),
            category: "Attractions".to_string(),
            description: "Local history museum with educational exhibits and family programs \
                showcasing Pleasanton's heritage."
                .to_string(),
            phone: Some("(925) 555-0189".to_string()),
            website: Some("https://museumonmain.org".to_string()),
            address: "603 Main St, Pleasanton, CA 94566".to_string(),
            latitude: 37.662096,
            longitude: -121.875302,
            hours: Some(week([
                "Closed",
                "10:00 AM - 4:00 PM",
                "10:00 AM - 4:00 PM",
                "10:00 AM - 4:00 PM",
                "10:00 AM - 4:00 PM",
                "10:00 AM - 4:00 PM",
                "1:00 PM - 4:00 PM",
            ])),
            rating: Some(4.1),
            review_count: Some(33),
            is_open: Some(true),
            external_id: Some("museum-on-main-pleasanton".to_string()),
            image_url: Some(photo("photo-1518998053901-5348d3961a04")),
            images: photos(&[
                "photo-1518998053901-5348d3961a04",
                "photo-1544735716-392fe2489ffa",
                "photo-1578662996442-48f60103fc96",
            ]),
        },
        NewBusiness {
            name: "Meadowlark Dairy".to_string(),
            category: "Dessert".to_string(),
            description: "Classic drive-thru dairy known for giant soft-serve cones \
                and nostalgic charm."
                .to_string(),
            phone: Some("(925) 555-0145".to_string()),
            website: None,
            address: "301 Ray St, Pleasanton, CA 94566".to_string(),
            latitude: 37.663014,
            longitude: -121.875919,
            hours: Some(week([
                "11:00 AM - 9:00 PM",
                "11:00 AM - 9:00 PM",
                "11:00 AM - 9:00 PM",
                "11:00 AM - 9:00 PM",
                "11:00 AM - 10:00 PM",
                "11:00 AM - 10:00 PM",
                "11:00 AM - 9:00 PM",
            ])),
            rating: Some(4.6),
            review_count: Some(156),
            is_open: Some(true),
            external_id: Some("meadowlark-dairy-pleasanton".to_string()),
            image_url: Some(photo("photo-1567206563064-6f60f40a2b57")),
            images: photos(&[
                "photo-1567206563064-6f60f40a2b57",
                "photo-1580915411954-282cb1b0d780",
                "photo-1551024506-0bccd828d307",
            ]),
        },
        NewBusiness {
            name: "Beer Baron Bar & Kitchen".to_string(),
            category: "Restaurants".to_string(),
            description: "Craft cocktails, beer flights, and comfort food in a cool setting \
                with live music."
                .to_string(),
            phone: Some("(925) 555-0167".to_string()),
            website: Some("https://beerbaronbar.com".to_string()),
            address: "714 Main St, Pleasanton, CA 94566".to_string(),
            latitude: 37.662188,
            longitude: -121.874796,
            hours: Some(week([
                "4:00 PM - 12:00 AM",
                "4:00 PM - 12:00 AM",
                "4:00 PM - 12:00 AM",
                "4:00 PM - 1:00 AM",
                "4:00 PM - 2:00 AM",
                "2:00 PM - 2:00 AM",
                "2:00 PM - 11:00 PM",
            ])),
            rating: Some(4.3),
            review_count: Some(98),
            is_open: Some(true),
            external_id: Some("beer-baron-bar-kitchen-pleasanton".to_string()),
            image_url: Some(photo("photo-1555396273-367ea4eb4db5")),
            images: photos(&[
                "photo-1555396273-367ea4eb4db5",
                "photo-1559339352-11d035aa65de",
                "photo-1571115764595-644a1f56a55c",
            ]),
        },
    ]
}

fn reviews() -> Vec<NewReview> {
    vec![
        NewReview {
            business_id: 1,
            author: "Sarah M.".to_string(),
            rating: 5,
            text: "Amazing atmosphere and incredible food! The patio is perfect for dinner \
                with friends."
                .to_string(),
            date: "2024-01-15".to_string(),
        },
        NewReview {
            business_id: 2,
            author: "Mike R.".to_string(),
            rating: 4,
            text: "Great coffee and cozy atmosphere. WiFi is reliable for working remotely."
                .to_string(),
            date: "2024-01-10".to_string(),
        },
        NewReview {
            business_id: 3,
            author: "Emma L.".to_string(),
            rating: 5,
            text: "Beautiful selection and amazing personal styling service. Highly recommend!"
                .to_string(),
            date: "2024-01-08".to_string(),
        },
    ]
}
