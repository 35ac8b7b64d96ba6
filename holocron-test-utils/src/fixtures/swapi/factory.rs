//! JSON payloads shaped like SWAPI catalog responses.
//!
//! Factories return `serde_json::Value` so tests can feed them to mock endpoints or
//! deserialize them directly into the client's envelope types.

use serde_json::{json, Value};

/// Create person properties with default test values.
///
/// The person lives on planet `1` and carries no `starships` or `vehicles`
/// fields, matching most records in the catalog.
///
/// # Arguments
/// - `api_url` - Base URL locators are built from
/// - `uid` - Identifier of the person
/// - `name` - Display name
pub fn person(api_url: &str, uid: &str, name: &str) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": format!("{}/planets/1", api_url),
        "url": format!("{}/people/{}", api_url, uid),
    })
}

/// Create person properties with explicit homeworld, starships and vehicles.
///
/// A `None` homeworld is serialized as `null`. Starship and vehicle identifiers
/// become locators under `/starships` and `/vehicles`.
pub fn person_with(
    api_url: &str,
    uid: &str,
    name: &str,
    homeworld: Option<&str>,
    starships: &[&str],
    vehicles: &[&str],
) -> Value {
    let mut properties = person(api_url, uid, name);

    properties["homeworld"] = match homeworld {
        Some(planet) => json!(format!("{}/planets/{}", api_url, planet)),
        None => Value::Null,
    };
    properties["starships"] = json!(locators(api_url, "starships", starships));
    properties["vehicles"] = json!(locators(api_url, "vehicles", vehicles));

    properties
}

/// Create film properties listing the locators of its `characters`.
pub fn film(title: &str, characters: &[String]) -> Value {
    json!({
        "title": title,
        "episode_id": 0,
        "director": "George Lucas",
        "characters": characters,
    })
}

/// Wrap `properties` in a single-resource envelope.
pub fn item(properties: Value) -> Value {
    json!({
        "message": "ok",
        "result": resource(properties),
    })
}

/// Wrap each of `properties` in a list envelope, as search and the film catalog return.
pub fn list(properties: Vec<Value>) -> Value {
    let result: Vec<Value> = properties.into_iter().map(resource).collect();

    json!({
        "message": "ok",
        "result": result,
    })
}

/// Create a paginated listing of lightweight references.
///
/// # Arguments
/// - `api_url` - Base URL the reference locators are built from
/// - `references` - `(uid, name)` pairs in listing order
/// - `total_records` - Number of records across all pages
/// - `limit` - Page size used to compute `total_pages`
pub fn page(api_url: &str, references: &[(&str, &str)], total_records: u32, limit: u32) -> Value {
    let results: Vec<Value> = references
        .iter()
        .map(|(uid, name)| reference(api_url, uid, name))
        .collect();

    json!({
        "message": "ok",
        "total_records": total_records,
        "total_pages": total_records.div_ceil(limit.max(1)),
        "previous": null,
        "next": null,
        "results": results,
    })
}

pub fn reference(api_url: &str, uid: &str, name: &str) -> Value {
    json!({
        "uid": uid,
        "name": name,
        "url": format!("{}/people/{}", api_url, uid),
    })
}

fn resource(properties: Value) -> Value {
    let uid = properties["url"]
        .as_str()
        .and_then(|url| url.rsplit('/').next())
        .map(str::to_string);

    json!({
        "properties": properties,
        "uid": uid,
        "description": "A resource within the Star Wars universe",
    })
}

fn locators(api_url: &str, kind: &str, ids: &[&str]) -> Vec<String> {
    ids.iter()
        .map(|id| format!("{}/{}/{}", api_url, kind, id))
        .collect()
}
