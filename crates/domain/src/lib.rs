mod availability;
mod device;
mod opening_hours;
mod restaurant;
mod site_metadata;

// re-exports
pub use availability::OrderAvailability;
pub use device::{DevicePlatform, DeviceRegistration, DeviceToken};
pub use opening_hours::{
    DaySchedule, FormattedDay, OpeningStatus, RestaurantHours, StatusReason,
    WeeklySchedule,
};
pub use restaurant::{Restaurant, RestaurantId};
pub use site_metadata::{
    ChangeFrequency, RobotsRules, STATIC_PATHS, SitemapEntry, robots, sitemap, sitemap_xml,
};
