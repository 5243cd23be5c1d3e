//! Source-data type descriptors mapped to catalog categories.
//!
//! The city's open-data exports label features with free-form type strings
//! (`USER_Type` in the food-resources layer, `POI_TYPE_DESC` in the
//! points-of-interest layer). These tables are data, not logic: extending
//! coverage means adding a row, not touching the loader. A few keys
//! reproduce glitches in the exports themselves (doubled spaces, mangled
//! encoding); the lookup also trims, which absorbs the trailing-space
//! variants.

use crate::types::ServiceCategory;
use std::collections::HashMap;
use std::sync::LazyLock;

static FOOD_TYPES: LazyLock<HashMap<&'static str, ServiceCategory>> = LazyLock::new(|| {
    HashMap::from([
        ("Low-cost Grocery Store", ServiceCategory::Grocery),
        ("Cultural Food Store", ServiceCategory::Grocery),
        ("Farm Stand", ServiceCategory::Grocery),
        ("Farmers Market", ServiceCategory::Grocery),
        ("Fresh Food Market Pop-Ups", ServiceCategory::Grocery),
        ("Community Café", ServiceCategory::Community),
        ("Community Food Programs", ServiceCategory::Community),
        // Doubled space as it appears in the export.
        ("Community Food  Programs", ServiceCategory::Community),
        ("Community Gardens", ServiceCategory::Community),
        // Mangled encoding as it appears in the export.
        ("Community Garden??s - Municipal Land", ServiceCategory::Community),
        ("Community Gardens - Municipal Land", ServiceCategory::Community),
        ("Community Orchards and Food Forests", ServiceCategory::Community),
        (
            "Community Orchards and Food Forests - Municipal Land",
            ServiceCategory::Community,
        ),
        ("Meal Provider Program", ServiceCategory::Community),
    ])
});

static POI_TYPES: LazyLock<HashMap<&'static str, ServiceCategory>> = LazyLock::new(|| {
    HashMap::from([
        // Healthcare
        ("Hospital", ServiceCategory::Healthcare),
        ("Health Centre", ServiceCategory::Healthcare),
        ("Ambulance Station", ServiceCategory::Healthcare),
        ("Long Term Care", ServiceCategory::Healthcare),
        ("Retirement Residence", ServiceCategory::Healthcare),
        ("Pharmacy", ServiceCategory::Pharmacy),
        // Transportation
        ("Bus Transfer Station", ServiceCategory::Transportation),
        ("Train Station", ServiceCategory::Transportation),
        ("Ferry Dock", ServiceCategory::Transportation),
        ("Ferry Terminal", ServiceCategory::Transportation),
        ("Airport", ServiceCategory::Transportation),
        ("Airport Facility", ServiceCategory::Transportation),
        ("Park and Ride", ServiceCategory::Transportation),
        // Community services
        ("Community Centre", ServiceCategory::Community),
        ("Community Service", ServiceCategory::Community),
        ("Community Garden", ServiceCategory::Community),
        ("Seniors Centre", ServiceCategory::Community),
        ("Settlement Services", ServiceCategory::Community),
        ("Social Services", ServiceCategory::Community),
        ("Childcare Facility", ServiceCategory::Community),
        ("Childcare Facility (Private)", ServiceCategory::Community),
        ("Childcare Programs", ServiceCategory::Community),
        ("Place of Worship", ServiceCategory::Community),
        ("Post Office", ServiceCategory::Community),
        ("Military Family Resource Centre", ServiceCategory::Community),
        // Libraries get their own category here, unlike the source data's
        // catch-all community bucket.
        ("Library", ServiceCategory::Libraries),
        // Education / government / emergency / housing / banking
        ("School", ServiceCategory::Education),
        ("College", ServiceCategory::Education),
        ("University", ServiceCategory::Education),
        ("Municipal Office", ServiceCategory::Government),
        ("City Hall", ServiceCategory::Government),
        ("Fire Station", ServiceCategory::Emergency),
        ("Police Station", ServiceCategory::Emergency),
        ("Emergency Shelter", ServiceCategory::Housing),
        ("Supportive Housing", ServiceCategory::Housing),
        ("Bank", ServiceCategory::Banking),
        ("Credit Union", ServiceCategory::Banking),
        // Recreation
        ("Park", ServiceCategory::Recreation),
        ("Parkette", ServiceCategory::Recreation),
        ("Open Space", ServiceCategory::Recreation),
        ("Arena", ServiceCategory::Recreation),
        ("Aquatics Centre - Private", ServiceCategory::Recreation),
        ("Outdoor Aquatics Centre - Public", ServiceCategory::Recreation),
        ("Swimming Pool - Public", ServiceCategory::Recreation),
        ("Beach", ServiceCategory::Recreation),
        ("Golf Course", ServiceCategory::Recreation),
        ("Driving Range", ServiceCategory::Recreation),
        ("Soccer Field", ServiceCategory::Recreation),
        ("Soccer Fields", ServiceCategory::Recreation),
        ("Soccer/Football Field", ServiceCategory::Recreation),
        ("Mini Soccer Field", ServiceCategory::Recreation),
        ("Baseball Field", ServiceCategory::Recreation),
        ("Basketball Court", ServiceCategory::Recreation),
        ("Tennis Court", ServiceCategory::Recreation),
        ("Pickleball Court", ServiceCategory::Recreation),
        ("Multi Courts", ServiceCategory::Recreation),
        ("Multi Use Court", ServiceCategory::Recreation),
        ("Multi-Use Court", ServiceCategory::Recreation),
        ("Sports Field", ServiceCategory::Recreation),
        ("Athletic Centre", ServiceCategory::Recreation),
        ("Recreation Centre", ServiceCategory::Recreation),
        ("Recreation Facility", ServiceCategory::Recreation),
        ("Private Recreation Facility", ServiceCategory::Recreation),
        ("Running Track", ServiceCategory::Recreation),
        ("Track & Field", ServiceCategory::Recreation),
        ("Playground", ServiceCategory::Recreation),
        ("Play Structure", ServiceCategory::Recreation),
        ("Playground Structure", ServiceCategory::Recreation),
        ("Playground Swingset", ServiceCategory::Recreation),
        ("Swingset", ServiceCategory::Recreation),
        ("Climber", ServiceCategory::Recreation),
        ("Slide", ServiceCategory::Recreation),
        ("Teeter Toter", ServiceCategory::Recreation),
        ("Splash Pad", ServiceCategory::Recreation),
        ("Water Park", ServiceCategory::Recreation),
        ("Off-Leash Dog Park", ServiceCategory::Recreation),
        ("Outdoor Rink (Community)", ServiceCategory::Recreation),
        ("Outdoor Rink (Staffed)", ServiceCategory::Recreation),
        ("Outdoor Rink (Unstaffed)", ServiceCategory::Recreation),
        ("Outdoor Rink (Community)(Not 2021)", ServiceCategory::Recreation),
        ("Lawn Bowling", ServiceCategory::Recreation),
        ("Beach Volleyball Court", ServiceCategory::Recreation),
        ("Shuffleboard", ServiceCategory::Recreation),
        ("Marina", ServiceCategory::Recreation),
        ("Boat Ramp", ServiceCategory::Recreation),
        ("Trail Access", ServiceCategory::Recreation),
        ("Trail Access & Parking", ServiceCategory::Recreation),
        ("Trail/Pathway", ServiceCategory::Recreation),
        ("Trailhead & Parking", ServiceCategory::Recreation),
        ("Museum", ServiceCategory::Recreation),
        ("Gallery", ServiceCategory::Recreation),
        ("Theatre", ServiceCategory::Recreation),
        ("Performing Arts Centre", ServiceCategory::Recreation),
        ("Historic Site", ServiceCategory::Recreation),
        ("Heritage Site", ServiceCategory::Recreation),
        ("Batting Cage", ServiceCategory::Recreation),
    ])
});

/// Map a food-resource layer type string to a category. Unknown or missing
/// types yield `None`; the loader skips those features. Some exports carry
/// stray whitespace in the type field, so the key is trimmed first.
pub fn map_food_type(user_type: Option<&str>) -> Option<ServiceCategory> {
    FOOD_TYPES.get(user_type?.trim()).copied()
}

/// Map a points-of-interest layer type string to a category.
pub fn map_poi_type(poi_type_desc: Option<&str>) -> Option<ServiceCategory> {
    POI_TYPES.get(poi_type_desc?.trim()).copied()
}
