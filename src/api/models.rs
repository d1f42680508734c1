use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::ApiError;

/// One bar-chart column: weight and calories burned for one day. `day` is
/// the positional label "1".."7", not the backend's date string.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySample {
    pub day: String,
    pub kilogram: f32,
    pub calories: f32,
}

/// Average session length for one weekday (1 = Monday .. 7 = Sunday).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSample {
    pub day: u8,
    pub session_length: f32,
}

/// One radar axis: resolved label plus raw value. Order as received decides
/// the angular position.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetric {
    pub kind: String,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutritionSummary {
    pub calorie_count: u32,
    pub protein_count: u32,
    pub carbohydrate_count: u32,
    pub lipid_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub first_name: String,
    /// Goal completion percentage, clamped to [0, 100].
    pub score: f32,
    pub key_data: NutritionSummary,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserPayload {
    user_infos: Option<UserInfosPayload>,
    // The backend serves either `todayScore` or `score` depending on the
    // user record; both are a 0..1 fraction.
    today_score: Option<f32>,
    score: Option<f32>,
    key_data: KeyDataPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserInfosPayload {
    first_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyDataPayload {
    calorie_count: u32,
    protein_count: u32,
    carbohydrate_count: u32,
    lipid_count: u32,
}

#[derive(Debug, Deserialize)]
struct ActivityPayload {
    sessions: Vec<ActivitySessionPayload>,
}

#[derive(Debug, Deserialize)]
struct ActivitySessionPayload {
    kilogram: f32,
    calories: f32,
}

#[derive(Debug, Deserialize)]
struct AverageSessionsPayload {
    sessions: Vec<AverageSessionPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AverageSessionPayload {
    day: u8,
    session_length: f32,
}

#[derive(Debug, Deserialize)]
struct PerformancePayload {
    kind: HashMap<String, String>,
    data: Vec<PerformanceEntryPayload>,
}

#[derive(Debug, Deserialize)]
struct PerformanceEntryPayload {
    value: f32,
    kind: u32,
}

fn decode<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::Format(err.to_string()))
}

pub fn parse_profile(value: Value) -> Result<UserProfile, ApiError> {
    let envelope: Envelope<UserPayload> = decode(value)?;
    let payload = envelope.data;

    let fraction = payload
        .today_score
        .or(payload.score)
        .ok_or_else(|| ApiError::Format("missing todayScore/score field".to_owned()))?;

    Ok(UserProfile {
        first_name: payload
            .user_infos
            .map(|infos| infos.first_name)
            .unwrap_or_default(),
        score: (fraction * 100.0).clamp(0.0, 100.0),
        key_data: NutritionSummary {
            calorie_count: payload.key_data.calorie_count,
            protein_count: payload.key_data.protein_count,
            carbohydrate_count: payload.key_data.carbohydrate_count,
            lipid_count: payload.key_data.lipid_count,
        },
    })
}

pub fn parse_activity(value: Value) -> Result<Vec<ActivitySample>, ApiError> {
    let envelope: Envelope<ActivityPayload> = decode(value)?;

    // Days are relabelled by position; the backend's date strings never
    // reach the chart.
    Ok(envelope
        .data
        .sessions
        .into_iter()
        .enumerate()
        .map(|(index, session)| ActivitySample {
            day: (index + 1).to_string(),
            kilogram: session.kilogram,
            calories: session.calories,
        })
        .collect())
}

pub fn parse_average_sessions(value: Value) -> Result<Vec<SessionSample>, ApiError> {
    let envelope: Envelope<AverageSessionsPayload> = decode(value)?;

    Ok(envelope
        .data
        .sessions
        .into_iter()
        .map(|session| SessionSample {
            day: session.day,
            session_length: session.session_length,
        })
        .collect())
}

pub fn parse_performance(value: Value) -> Result<Vec<PerformanceMetric>, ApiError> {
    let envelope: Envelope<PerformancePayload> = decode(value)?;
    let payload = envelope.data;

    // Join each entry against the kind lookup table; an id the table does
    // not know keeps its numeric form rather than failing the whole chart.
    Ok(payload
        .data
        .into_iter()
        .map(|entry| {
            let key = entry.kind.to_string();
            let kind = payload.kind.get(&key).cloned().unwrap_or(key);
            PerformanceMetric {
                kind,
                value: entry.value,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_profile_with_today_score() {
        let value = json!({
            "data": {
                "id": 12,
                "userInfos": { "firstName": "Karl", "lastName": "Dovineau", "age": 31 },
                "todayScore": 0.12,
                "keyData": {
                    "calorieCount": 1930,
                    "proteinCount": 155,
                    "carbohydrateCount": 290,
                    "lipidCount": 50
                }
            }
        });

        let profile = parse_profile(value).unwrap();
        assert_eq!(profile.first_name, "Karl");
        assert_eq!(profile.score, 12.0);
        assert_eq!(profile.key_data.calorie_count, 1930);
        assert_eq!(profile.key_data.lipid_count, 50);
    }

    #[test]
    fn parses_profile_with_plain_score_field() {
        let value = json!({
            "data": {
                "userInfos": { "firstName": "Cecilia" },
                "score": 0.3,
                "keyData": {
                    "calorieCount": 2500,
                    "proteinCount": 90,
                    "carbohydrateCount": 150,
                    "lipidCount": 120
                }
            }
        });

        let profile = parse_profile(value).unwrap();
        assert_eq!(profile.score, 30.0);
    }

    #[test]
    fn profile_score_is_clamped() {
        let value = json!({
            "data": {
                "todayScore": 1.4,
                "keyData": {
                    "calorieCount": 1,
                    "proteinCount": 1,
                    "carbohydrateCount": 1,
                    "lipidCount": 1
                }
            }
        });

        assert_eq!(parse_profile(value).unwrap().score, 100.0);
    }

    #[test]
    fn profile_without_score_is_a_format_error() {
        let value = json!({
            "data": {
                "keyData": {
                    "calorieCount": 1,
                    "proteinCount": 1,
                    "carbohydrateCount": 1,
                    "lipidCount": 1
                }
            }
        });

        assert!(matches!(parse_profile(value), Err(ApiError::Format(_))));
    }

    #[test]
    fn activity_days_are_relabelled_by_position() {
        let value = json!({
            "data": {
                "userId": 12,
                "sessions": [
                    { "day": "2020-07-01", "kilogram": 80, "calories": 240 },
                    { "day": "2020-07-02", "kilogram": 80, "calories": 220 }
                ]
            }
        });

        let samples = parse_activity(value).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].day, "1");
        assert_eq!(samples[1].day, "2");
        assert_eq!(samples[0].kilogram, 80.0);
    }

    #[test]
    fn missing_sessions_array_is_a_format_error() {
        let value = json!({ "data": { "userId": 12 } });
        assert!(matches!(parse_activity(value), Err(ApiError::Format(_))));
    }

    #[test]
    fn parses_average_sessions() {
        let value = json!({
            "data": {
                "userId": 12,
                "sessions": [
                    { "day": 1, "sessionLength": 30 },
                    { "day": 2, "sessionLength": 23 }
                ]
            }
        });

        let samples = parse_average_sessions(value).unwrap();
        assert_eq!(
            samples,
            vec![
                SessionSample { day: 1, session_length: 30.0 },
                SessionSample { day: 2, session_length: 23.0 },
            ]
        );
    }

    #[test]
    fn performance_labels_are_joined_in_received_order() {
        let value = json!({
            "data": {
                "userId": 12,
                "kind": {
                    "1": "cardio",
                    "2": "energy",
                    "3": "endurance"
                },
                "data": [
                    { "value": 80, "kind": 3 },
                    { "value": 120, "kind": 1 },
                    { "value": 140, "kind": 9 }
                ]
            }
        });

        let metrics = parse_performance(value).unwrap();
        assert_eq!(metrics[0].kind, "endurance");
        assert_eq!(metrics[1].kind, "cardio");
        // Unknown ids keep their numeric form.
        assert_eq!(metrics[2].kind, "9");
        assert_eq!(metrics[2].value, 140.0);
    }

    #[test]
    fn performance_without_kind_table_is_a_format_error() {
        let value = json!({ "data": { "data": [{ "value": 80, "kind": 1 }] } });
        assert!(matches!(parse_performance(value), Err(ApiError::Format(_))));
    }
}
