use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Monday first, as the week is displayed.
const WEEK: [(Weekday, &str, &str); 7] = [
    (Weekday::Mon, "lundi", "Lundi"),
    (Weekday::Tue, "mardi", "Mardi"),
    (Weekday::Wed, "mercredi", "Mercredi"),
    (Weekday::Thu, "jeudi", "Jeudi"),
    (Weekday::Fri, "vendredi", "Vendredi"),
    (Weekday::Sat, "samedi", "Samedi"),
    (Weekday::Sun, "dimanche", "Dimanche"),
];

const DEFAULT_OPENING: &str = "00:00";
const DEFAULT_CLOSING: &str = "23:59";
const MIDNIGHT: NaiveTime = NaiveTime::MIN;

fn day_key(weekday: Weekday) -> &'static str {
    WEEK.iter()
        .find(|(day, ..)| *day == weekday)
        .map(|(_, key, _)| *key)
        .unwrap_or("lundi")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    #[serde(rename = "ouvert")]
    pub open: bool,
    #[serde(rename = "ouverture")]
    pub opening: Option<String>,
    #[serde(rename = "fermeture")]
    pub closing: Option<String>,
}

impl DaySchedule {
    /// Anything but `"ouvert": true` is a closed day. Times that are not
    /// strings are treated as missing.
    fn from_value(value: &Value) -> Option<Self> {
        let day = value.as_object()?;
        let text = |field: &str| day.get(field).and_then(Value::as_str).map(str::to_owned);

        Some(Self {
            open: day.get("ouvert").and_then(Value::as_bool).unwrap_or(false),
            opening: text("ouverture"),
            closing: text("fermeture"),
        })
    }
}

/// Opening hours keyed by french weekday (`lundi` .. `dimanche`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeeklySchedule(BTreeMap<String, DaySchedule>);

impl WeeklySchedule {
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.0.get(day_key(weekday))
    }

    fn from_entries(entries: Map<String, Value>) -> Self {
        entries
            .into_iter()
            .filter_map(|(key, value)| match DaySchedule::from_value(&value) {
                Some(day) => Some((key, day)),
                None => {
                    if !value.is_null() {
                        tracing::warn!(
                            key = %key,
                            %value,
                            "Skipping opening hours entry that is not a day."
                        );
                    }
                    None
                }
            })
            .collect()
    }
}

impl FromIterator<(String, DaySchedule)> for WeeklySchedule {
    fn from_iter<T: IntoIterator<Item = (String, DaySchedule)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The store holds either a json object or the same object encoded as a string.
        let entries = match Value::deserialize(deserializer)? {
            Value::Object(entries) => entries,
            Value::String(text) => match serde_json::from_str(&text) {
                Ok(Value::Object(entries)) => entries,
                Ok(other) => {
                    tracing::warn!(value = %other, "Ignoring opening hours that are not an object.");
                    Map::new()
                }
                Err(error) => {
                    tracing::warn!(%error, "Ignoring undecodable opening hours.");
                    Map::new()
                }
            },
            other => {
                tracing::warn!(value = %other, "Ignoring opening hours that are not an object.");
                Map::new()
            }
        };

        Ok(Self::from_entries(entries))
    }
}

/// The subset of a restaurant record needed for opening hours.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantHours {
    #[serde(rename = "horaires", default)]
    pub schedule: Option<WeeklySchedule>,
    #[serde(rename = "ferme_manuellement", default)]
    pub manually_closed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedDay {
    pub day: &'static str,
    pub day_key: &'static str,
    /// 0 is sunday.
    pub day_of_week: u32,
    pub ouvert: bool,
    pub ouverture: Option<String>,
    pub fermeture: Option<String>,
    pub is_closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusReason {
    Manual,
    ClosedToday,
    Open,
    OutsideHours,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningStatus {
    pub is_open: bool,
    pub message: &'static str,
    pub reason: StatusReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<&'static str>,
}

impl RestaurantHours {
    pub fn is_manually_closed(&self) -> bool {
        self.manually_closed.unwrap_or(false)
    }

    /// The seven days of the week, monday first, missing days reported closed.
    pub fn formatted(&self) -> Vec<FormattedDay> {
        WEEK.iter()
            .map(|(weekday, key, label)| {
                let day = self.schedule.as_ref().and_then(|s| s.day(*weekday));
                let open = day.is_some_and(|d| d.open);
                FormattedDay {
                    day: label,
                    day_key: key,
                    day_of_week: weekday.num_days_from_sunday(),
                    ouvert: open,
                    ouverture: day.and_then(|d| d.opening.clone()),
                    fermeture: day.and_then(|d| d.closing.clone()),
                    is_closed: !open,
                }
            })
            .collect()
    }

    pub fn status_at(&self, at: NaiveDateTime) -> OpeningStatus {
        if self.is_manually_closed() {
            return OpeningStatus {
                is_open: false,
                message: "Restaurant fermé manuellement",
                reason: StatusReason::Manual,
                open_time: None,
                close_time: None,
                current_time: None,
                today: None,
            };
        }

        let today = day_key(at.weekday());
        let day = self
            .schedule
            .as_ref()
            .and_then(|s| s.day(at.weekday()))
            .filter(|d| d.open);

        let Some(day) = day else {
            return OpeningStatus {
                is_open: false,
                message: "Restaurant fermé aujourd'hui",
                reason: StatusReason::ClosedToday,
                open_time: None,
                close_time: None,
                current_time: None,
                today: Some(today),
            };
        };

        let opening = parse_time(day.opening.as_deref(), DEFAULT_OPENING);
        let closing = parse_time(day.closing.as_deref(), DEFAULT_CLOSING);
        let current = NaiveTime::from_hms_opt(at.hour(), at.minute(), 0).unwrap_or(MIDNIGHT);

        let is_open = if opening <= closing {
            opening <= current && current <= closing
        } else {
            // the window runs past midnight
            current >= opening || current <= closing
        };

        OpeningStatus {
            is_open,
            message: if is_open {
                "Restaurant ouvert"
            } else {
                "Restaurant fermé"
            },
            reason: if is_open {
                StatusReason::Open
            } else {
                StatusReason::OutsideHours
            },
            open_time: Some(opening.format("%H:%M").to_string()),
            close_time: Some(closing.format("%H:%M").to_string()),
            current_time: Some(current.format("%H:%M").to_string()),
            today: Some(today),
        }
    }
}

fn parse_time(value: Option<&str>, default: &str) -> NaiveTime {
    let parse = |s: &str| {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s.trim(), "%H:%M:%S"))
    };

    value
        .and_then(|s| {
            parse(s)
                .inspect_err(|error| tracing::warn!(%error, value = s, "Unreadable opening time."))
                .ok()
        })
        .or_else(|| parse(default).ok())
        .unwrap_or(MIDNIGHT)
}
