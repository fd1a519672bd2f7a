//! Fixed seed data: locations, activities, and scripted training utterances
//!
//! The seed set mirrors the curated itinerary the bot ships with. Inserting
//! it is the job of [`crate::db::Database::seed`], which skips rows that
//! already exist.

use crate::models::{NewActivity, NewLocation, NewTrainingUtterance};

/// The seeded location names with their coordinates.
pub const LOCATION_COORDINATES: &[(&str, f64, f64)] = &[
    ("Corfe Castle", 50.6395, -2.0566),
    ("The Cotswolds", 51.8330, -1.8433),
    ("Cambridge", 52.2053, 0.1218),
    ("Bristol", 51.4545, -2.5879),
    ("Oxford", 51.7520, -1.2577),
    ("Norwich", 52.6309, 1.2974),
    ("Stonehenge", 51.1789, -1.8262),
    ("Watergate Bay", 50.4429, -5.0553),
    ("Birmingham", 52.4862, -1.8904),
];

/// Activity rows as (location name, condition, activity, recommendation).
/// Conditions use the OpenWeather primary category labels.
const ACTIVITY_ROWS: &[(&str, &str, &str, &str)] = &[
    (
        "Bristol",
        "Rain",
        "SS Great Britain Visit",
        "Step aboard the SS Great Britain and discover Bristol's maritime history on a rainy day.",
    ),
    (
        "Bristol",
        "Clear",
        "Bristol Balloon Fiesta",
        "Take to the skies and enjoy a hot air balloon ride over Bristol.",
    ),
    (
        "Bristol",
        "Clouds",
        "Bristol Shopping Experience",
        "Rug up and enjoy shopping at the Cabot Circus, it's the perfect day to be indoors.",
    ),
    (
        "Oxford",
        "Rain",
        "Ashmolean Museum Exploration",
        "Discover treasures from around the world in the dry comfort of Oxford's Ashmolean Museum.",
    ),
    (
        "Oxford",
        "Clear",
        "Punting on the Isis",
        "Take a traditional punt along the river on a clear Oxford day.",
    ),
    (
        "Oxford",
        "Clouds",
        "Indoor Climbing Adventure",
        "Test your climbing skills at the indoor wall, a perfect cloudy day activity.",
    ),
    (
        "Cambridge",
        "Rain",
        "Fitzwilliam Museum Tour",
        "Enjoy an educational visit to the Fitzwilliam Museum, avoiding the rain.",
    ),
    (
        "Cambridge",
        "Clear",
        "Cambridge University Botanic Garden",
        "Explore the beautiful plant collections at the Botanic Gardens on a clear day.",
    ),
    (
        "Cambridge",
        "Clouds",
        "Hot Chocolate in Fitzbillies",
        "Savor a famous Fitzbillies hot chocolate to warm up on a cloudy day in Cambridge.",
    ),
    (
        "Corfe Castle",
        "Rain",
        "Corfe Castle Model Village",
        "Step back in time and enjoy the Corfe Castle Model Village indoors when it's raining.",
    ),
    (
        "Corfe Castle",
        "Clear",
        "Hike around Corfe Castle",
        "Take a scenic hike around Corfe Castle and enjoy the stunning views on a clear day.",
    ),
    (
        "Corfe Castle",
        "Clouds",
        "Pub Lunch by the Fireplace",
        "Cozy up with a warm pub lunch by the fire in one of Corfe's historic taverns.",
    ),
    (
        "The Cotswolds",
        "Rain",
        "Cotswold Motoring Museum",
        "Stay dry while journeying through automotive history at the Cotswold Motoring Museum.",
    ),
    (
        "The Cotswolds",
        "Clear",
        "Walk through Bourton-on-the-Water",
        "Stroll through the 'Venice of the Cotswolds' and visit the charming boutiques.",
    ),
    (
        "The Cotswolds",
        "Clouds",
        "Spa Day in the Cotswolds",
        "Treat yourself to a relaxing spa day in the tranquil setting of the Cotswolds.",
    ),
    (
        "Norwich",
        "Rain",
        "Norwich Castle Museum & Art Gallery",
        "Explore Norwich's history and culture indoors at the castle museum.",
    ),
    (
        "Norwich",
        "Clear",
        "Norwich Market",
        "Enjoy local food and shopping at Norwich Market on a clear day.",
    ),
    (
        "Norwich",
        "Clouds",
        "Theatre Royal Norwich",
        "Catch a show at the Theatre Royal for a memorable night out in Norwich.",
    ),
    (
        "Stonehenge",
        "Rain",
        "Stonehenge Visitor Center",
        "Learn about the mysteries of Stonehenge in the comfort of the visitor center.",
    ),
    (
        "Stonehenge",
        "Clear",
        "Stonehenge Walk",
        "Take a walk around the historic Stonehenge site with clear skies above.",
    ),
    (
        "Stonehenge",
        "Clouds",
        "Stonehenge Photo Opportunity",
        "Capture the beauty of Stonehenge in a moody, cloudy setting.",
    ),
    (
        "Watergate Bay",
        "Rain",
        "Indoor Swim and Spa",
        "Relax in the warmth of an indoor pool and spa while watching the rain outside.",
    ),
    (
        "Watergate Bay",
        "Clear",
        "Watergate Bay Surfing",
        "Catch some waves and soak up the sun with a surfing lesson at Watergate Bay.",
    ),
    (
        "Watergate Bay",
        "Clouds",
        "Jamie Oliver's Fifteen Cornwall",
        "Enjoy seaside dining at Jamie Oliver's restaurant, overlooking the cloudy bay.",
    ),
    (
        "Birmingham",
        "Rain",
        "Birmingham Museum and Art Gallery",
        "Stay out of the rain while discovering art and history in Birmingham.",
    ),
    (
        "Birmingham",
        "Clear",
        "Birmingham Botanical Gardens",
        "Take a leisurely walk in the Birmingham Botanical Gardens under the clear sky.",
    ),
    (
        "Birmingham",
        "Clouds",
        "Birmingham's Frankfurt Christmas Market",
        "Experience the magic of Birmingham's Christmas market.",
    ),
];

/// Scripted prompt/response pairs fed to the conversational engine.
const TRAINING_ROWS: &[(&str, &str)] = &[
    (
        "What can you do?",
        "I can retrieve weather information for locations in your itinerary!",
    ),
    (
        "How do you work?",
        "Just ask where you would like to know the weather forecast and let me do the rest!",
    ),
    (
        "What is the weather",
        "Which location would you like the weather forecast?",
    ),
];

/// All seed locations.
#[must_use]
pub fn locations() -> Vec<NewLocation> {
    LOCATION_COORDINATES
        .iter()
        .map(|&(name, latitude, longitude)| NewLocation {
            name: name.to_string(),
            latitude,
            longitude,
        })
        .collect()
}

/// All seed activities as (location name, row) pairs; the caller resolves
/// names to ids once the locations are inserted.
#[must_use]
pub fn activities_for(location_name: &str, location_id: i64) -> Vec<NewActivity> {
    ACTIVITY_ROWS
        .iter()
        .filter(|(name, _, _, _)| *name == location_name)
        .map(|&(_, condition, activity, recommendation)| NewActivity {
            location_id,
            weather_condition: condition.to_string(),
            activity: activity.to_string(),
            recommendation: recommendation.to_string(),
        })
        .collect()
}

/// All seed training utterances.
#[must_use]
pub fn training_utterances() -> Vec<NewTrainingUtterance> {
    TRAINING_ROWS
        .iter()
        .map(|&(input_text, response_text)| NewTrainingUtterance {
            input_text: input_text.to_string(),
            response_text: response_text.to_string(),
        })
        .collect()
}
