//! Entities mirroring the upstream coaster API's JSON shapes.
//!
//! Decoding is deliberately permissive: every field carries a default so
//! that keys absent from the upstream payload decode to empty strings,
//! zeroes, or empty collections instead of failing the whole response.
//! Field names are camelCase with PascalCase aliases, so both spellings
//! the upstream has been observed to emit are accepted.

use serde::{Deserialize, Serialize};

/// The amusement park a coaster is installed at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Park {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Id")]
    pub id: i64,
}

/// Operating status, e.g. "Operating" since a given date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingStatus {
    #[serde(default, alias = "State")]
    pub state: String,
    #[serde(default, alias = "Date")]
    pub date: String,
}

/// A measurement the upstream reports either as a bare number or as
/// annotated text (e.g. `205` vs `"205 ft"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Physical statistics for a coaster. Several measurements come back in
/// inconsistent shapes upstream, hence [`NumberOrText`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default, alias = "Length")]
    pub length: Option<NumberOrText>,
    #[serde(default, alias = "UphillLength")]
    pub uphill_length: String,
    #[serde(default, alias = "DownhillLength")]
    pub downhill_length: String,
    #[serde(default, alias = "Drop")]
    pub drop: Option<NumberOrText>,
    #[serde(default, alias = "Height")]
    pub height: Option<NumberOrText>,
    #[serde(default, alias = "Speed")]
    pub speed: Option<NumberOrText>,
    #[serde(default, alias = "Inversions")]
    pub inversions: String,
    #[serde(default, alias = "Duration")]
    pub duration: String,
    #[serde(default, alias = "Elements")]
    pub elements: Vec<String>,
    #[serde(default, alias = "Arrangement")]
    pub arrangement: String,
    #[serde(default, alias = "Manufactured")]
    pub manufactured: String,
    #[serde(default, alias = "Capacity")]
    pub capacity: String,
    #[serde(default, alias = "Dimensions")]
    pub dimensions: Option<NumberOrText>,
}

/// A photo of a coaster with its attribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    #[serde(default, alias = "Id")]
    pub id: i64,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Url")]
    pub url: String,
    #[serde(default, alias = "CopyName")]
    pub copy_name: String,
    #[serde(default, alias = "CopyDate")]
    pub copy_date: String,
}

/// Geographic coordinates; the upstream reports these as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coords {
    #[serde(default, alias = "Lat")]
    pub lat: String,
    #[serde(default, alias = "Lng")]
    pub lng: String,
}

/// A single roller coaster record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coaster {
    #[serde(default, alias = "Id")]
    pub id: i64,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Park")]
    pub park: Option<Park>,
    #[serde(default, alias = "City")]
    pub city: String,
    #[serde(default, alias = "State")]
    pub state: String,
    #[serde(default, alias = "Country")]
    pub country: String,
    #[serde(default, alias = "Region")]
    pub region: String,
    #[serde(default, alias = "Link")]
    pub link: String,
    #[serde(default, alias = "Status")]
    pub status: Option<OperatingStatus>,
    #[serde(default, alias = "Make")]
    pub make: String,
    #[serde(default, alias = "Model")]
    pub model: String,
    #[serde(default, rename = "type", alias = "Type")]
    pub coaster_type: String,
    #[serde(default, alias = "Design")]
    pub design: String,
    #[serde(default, alias = "Stats")]
    pub stats: Option<Stats>,
    #[serde(default, alias = "MainPicture")]
    pub main_picture: Option<Picture>,
    #[serde(default, alias = "Pictures")]
    pub pictures: Vec<Picture>,
    #[serde(default, alias = "Coords")]
    pub coords: Option<Coords>,
}

/// One page of a larger collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, alias = "Count")]
    pub count: i64,
    #[serde(default, alias = "Total")]
    pub total: i64,
    #[serde(default, alias = "Offset")]
    pub offset: i64,
    #[serde(default, alias = "Limit")]
    pub limit: i64,
}

/// A page of coasters. The list and search endpoints return different
/// container shapes, kept as distinct variants here; under `untagged`
/// the required `pagination` / `totalMatch` field selects the variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoasterPage {
    Listing {
        #[serde(default, alias = "Data")]
        data: Vec<Coaster>,
        #[serde(alias = "Pagination")]
        pagination: Pagination,
    },
    SearchResults {
        #[serde(default, alias = "Coasters")]
        coasters: Vec<Coaster>,
        #[serde(rename = "totalMatch", alias = "TotalMatch")]
        total_match: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coaster_decodes_lowercase_keys() {
        let json = r#"{
            "id": 4027,
            "name": "Steel Vengeance",
            "park": { "name": "Cedar Point", "id": 57 },
            "city": "Sandusky",
            "state": "Ohio",
            "country": "United States",
            "type": "Steel",
            "design": "Sit Down",
            "coords": { "lat": "41.4822", "lng": "-82.6835" }
        }"#;

        let coaster: Coaster = serde_json::from_str(json).unwrap();
        assert_eq!(coaster.id, 4027);
        assert_eq!(coaster.name, "Steel Vengeance");
        assert_eq!(coaster.park.as_ref().unwrap().name, "Cedar Point");
        assert_eq!(coaster.coaster_type, "Steel");
        assert_eq!(coaster.coords.as_ref().unwrap().lat, "41.4822");
    }

    #[test]
    fn test_coaster_decodes_pascal_case_aliases() {
        let json = r#"{
            "Id": 1,
            "Name": "Fury 325",
            "City": "Charlotte",
            "MainPicture": { "Id": 9, "Name": "front", "Url": "https://example.com/9.jpg" }
        }"#;

        let coaster: Coaster = serde_json::from_str(json).unwrap();
        assert_eq!(coaster.id, 1);
        assert_eq!(coaster.name, "Fury 325");
        assert_eq!(coaster.city, "Charlotte");
        assert_eq!(coaster.main_picture.as_ref().unwrap().url, "https://example.com/9.jpg");
    }

    #[test]
    fn test_absent_fields_decode_to_defaults() {
        let coaster: Coaster = serde_json::from_str("{}").unwrap();
        assert_eq!(coaster.id, 0);
        assert_eq!(coaster.name, "");
        assert!(coaster.park.is_none());
        assert!(coaster.stats.is_none());
        assert!(coaster.pictures.is_empty());
    }

    #[test]
    fn test_stats_number_or_text_variants() {
        let json = r#"{ "length": 5740, "height": "205 ft", "speed": 74.5 }"#;
        let stats: Stats = serde_json::from_str(json).unwrap();

        assert!(matches!(stats.length, Some(NumberOrText::Number(n)) if n == 5740.0));
        assert!(matches!(stats.height, Some(NumberOrText::Text(ref t)) if t == "205 ft"));
        assert!(matches!(stats.speed, Some(NumberOrText::Number(n)) if n == 74.5));
        assert!(stats.drop.is_none());
        assert_eq!(stats.inversions, "");
    }

    #[test]
    fn test_page_decodes_listing_variant() {
        let json = r#"{
            "data": [{ "id": 1, "name": "Maverick" }],
            "pagination": { "count": 1, "total": 1200, "offset": 0, "limit": 300 }
        }"#;

        let page: CoasterPage = serde_json::from_str(json).unwrap();
        match page {
            CoasterPage::Listing { data, pagination } => {
                assert_eq!(data.len(), 1);
                assert_eq!(data[0].name, "Maverick");
                assert_eq!(pagination.limit, 300);
                assert_eq!(pagination.total, 1200);
            }
            CoasterPage::SearchResults { .. } => panic!("expected listing variant"),
        }
    }

    #[test]
    fn test_page_decodes_search_variant() {
        let json = r#"{
            "coasters": [{ "id": 2, "name": "Millennium Force" }],
            "totalMatch": 1
        }"#;

        let page: CoasterPage = serde_json::from_str(json).unwrap();
        match page {
            CoasterPage::SearchResults { coasters, total_match } => {
                assert_eq!(coasters.len(), 1);
                assert_eq!(coasters[0].id, 2);
                assert_eq!(total_match, 1);
            }
            CoasterPage::Listing { .. } => panic!("expected search variant"),
        }
    }

    #[test]
    fn test_coaster_round_trips_camel_case_keys() {
        let coaster = Coaster {
            id: 7,
            name: "Iron Gwazi".to_string(),
            main_picture: Some(Picture {
                id: 3,
                url: "https://example.com/3.jpg".to_string(),
                ..Picture::default()
            }),
            ..Coaster::default()
        };

        let json = serde_json::to_value(&coaster).unwrap();
        assert_eq!(json["name"], "Iron Gwazi");
        assert_eq!(json["mainPicture"]["url"], "https://example.com/3.jpg");
        assert!(json.get("MainPicture").is_none());
    }
}
