//! Turns raw playlist items from the catalog API into [`Track`] values.

use chrono::NaiveDate;

use crate::error::{Result, SyncError};
use crate::models::{Album, Artist, Track};
use crate::spotify_rs::types::SpotifyPlaylistItem;

/// Decode one raw playlist item and normalize it into a track.
///
/// Missing or mistyped required fields are a [`SyncError::Decode`]. A missing
/// or non-string `preview_url` is not an error, it becomes `None`.
pub fn normalize_item(raw: serde_json::Value) -> Result<Track> {
    let item: SpotifyPlaylistItem = serde_json::from_value(raw)?;
    let track = item.track;

    let album = Album {
        release_date: parse_release_date(&track.album.release_date)?,
        id: track.album.id,
        name: track.album.name,
    };

    let artists = track
        .artists
        .into_iter()
        .map(|artist| Artist {
            id: artist.id,
            name: artist.name,
        })
        .collect();

    Ok(Track {
        id: track.id,
        name: track.name,
        preview_url: track.preview_url,
        artists,
        album,
    })
}

/// Parse a release date whose precision is given by its length.
///
/// `YYYY` and `YYYY-MM` resolve to the first day of the year or month.
pub fn parse_release_date(date: &str) -> Result<NaiveDate> {
    // chrono would accept signs and padding in numeric fields
    let well_formed = date
        .bytes()
        .enumerate()
        .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if !well_formed {
        return Err(SyncError::DateFormat(date.to_string()));
    }

    let parsed = match date.len() {
        4 => NaiveDate::parse_from_str(&format!("{date}-01-01"), "%Y-%m-%d"),
        7 => NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d"),
        10 => NaiveDate::parse_from_str(date, "%Y-%m-%d"),
        _ => return Err(SyncError::DateFormat(date.to_string())),
    };

    parsed.map_err(|_| SyncError::DateFormat(date.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw_item() -> serde_json::Value {
        json!({
            "track": {
                "id": "t1",
                "name": "Satisfaction",
                "preview_url": "https://p.scdn.co/mp3-preview/abc",
                "artists": [
                    { "id": "a1", "name": "The Rolling Stones" },
                    { "id": "a2", "name": "Guest" }
                ],
                "album": { "id": "al1", "name": "Out of Our Heads", "release_date": "1965" }
            }
        })
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_year_precision() {
        assert_eq!(parse_release_date("1977").unwrap(), date(1977, 1, 1));
    }

    #[test]
    fn test_parse_month_precision() {
        assert_eq!(parse_release_date("1977-06").unwrap(), date(1977, 6, 1));
    }

    #[test]
    fn test_parse_day_precision() {
        assert_eq!(parse_release_date("1977-06-15").unwrap(), date(1977, 6, 15));
    }

    #[test]
    fn test_parse_unknown_length() {
        for bad in ["77", "1977-6-1", "", "1977-06-15T00:00"] {
            let err = parse_release_date(bad).unwrap_err();
            assert!(matches!(err, SyncError::DateFormat(ref s) if s == bad), "{bad}: {err:?}");
        }
    }

    #[test]
    fn test_parse_invalid_calendar_date() {
        for bad in [
            "1977-13",
            "1977-02-30",
            "-977",
            "+977",
            " 977",
            "1977- 6",
            "1977-06- 5",
            "1977/06",
            "19a7",
        ] {
            let err = parse_release_date(bad).unwrap_err();
            assert!(matches!(err, SyncError::DateFormat(ref s) if s == bad), "{bad}: {err:?}");
        }
    }

    #[test]
    fn test_normalize_item() {
        let track = normalize_item(raw_item()).unwrap();

        assert_eq!(track.id, "t1");
        assert_eq!(track.name, "Satisfaction");
        assert_eq!(
            track.preview_url.as_deref(),
            Some("https://p.scdn.co/mp3-preview/abc")
        );
        assert_eq!(
            track.artists.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["a1", "a2"]
        );
        assert_eq!(track.album.id, "al1");
        assert_eq!(track.album.release_date, date(1965, 1, 1));
    }

    #[test]
    fn test_missing_preview_url_is_none() {
        let mut raw = raw_item();
        raw["track"].as_object_mut().unwrap().remove("preview_url");

        let track = normalize_item(raw).unwrap();

        assert_eq!(track.preview_url, None);
    }

    #[test]
    fn test_non_string_preview_url_is_none() {
        for value in [json!(null), json!(42), json!({ "url": "x" })] {
            let mut raw = raw_item();
            raw["track"]["preview_url"] = value;

            assert_eq!(normalize_item(raw).unwrap().preview_url, None);
        }
    }

    #[test]
    fn test_track_without_artists() {
        let mut raw = raw_item();
        raw["track"]["artists"] = json!([]);

        assert!(normalize_item(raw).unwrap().artists.is_empty());
    }

    #[test]
    fn test_missing_required_field_is_decode_error() {
        let mut raw = raw_item();
        raw["track"]["album"].as_object_mut().unwrap().remove("release_date");

        let err = normalize_item(raw).unwrap_err();

        assert!(matches!(err, SyncError::Decode(ref msg) if msg.contains("release_date")));
    }

    #[test]
    fn test_wrong_type_is_decode_error() {
        let mut raw = raw_item();
        raw["track"]["id"] = json!(7);

        assert!(matches!(normalize_item(raw), Err(SyncError::Decode(_))));
    }

    #[test]
    fn test_null_track_is_decode_error() {
        assert!(matches!(
            normalize_item(json!({ "track": null })),
            Err(SyncError::Decode(_))
        ));
    }

    #[test]
    fn test_bad_release_date_is_date_error() {
        let mut raw = raw_item();
        raw["track"]["album"]["release_date"] = json!("65");

        assert!(matches!(normalize_item(raw), Err(SyncError::DateFormat(_))));
    }
}
