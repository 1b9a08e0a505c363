use base64::Engine as _;

use super::*;
use crate::model::{Artwork, Theme};

fn artwork(id: &str, title: &str, url: &str, room: Option<&str>) -> Artwork {
    Artwork { id: id.to_owned(), title: title.to_owned(), url: url.to_owned(), room: room.map(str::to_owned) }
}

fn studio() -> Gallery {
    Gallery {
        name: "Studio".to_owned(),
        theme: Some(Theme::Dark),
        artworks: vec![artwork("a1", "Sun", "https://x/1.jpg", Some("Room A"))],
    }
}

fn raw_token(text: &str) -> String {
    TOKEN_ENGINE.encode(text.as_bytes())
}

struct FixedFragment(Option<String>);

impl FragmentSource for FixedFragment {
    fn current_fragment(&self) -> Option<String> {
        self.0.clone()
    }
}

// =============================================================
// Round trips
// =============================================================

#[test]
fn decode_of_encode_returns_same_gallery() {
    let gallery = studio();
    let token = encode(&gallery);
    assert_eq!(decode(&token), Some(gallery));
}

#[test]
fn round_trip_preserves_unicode_in_every_field() {
    let gallery = Gallery {
        name: "Galerie été 🎨".to_owned(),
        theme: Some(Theme::Light),
        artworks: vec![artwork("ü1", "日の出 «Sunrise»", "https://例え.jp/画像.png?q=ñ", Some("Sala Ω"))],
    };
    assert_eq!(decode(&encode(&gallery)), Some(gallery));
}

#[test]
fn round_trip_preserves_empty_gallery_without_theme() {
    let gallery = Gallery { name: String::new(), theme: None, artworks: Vec::new() };
    assert_eq!(decode(&encode(&gallery)), Some(gallery));
}

#[test]
fn round_trip_preserves_order_of_many_artworks() {
    let artworks: Vec<Artwork> = (0..500)
        .map(|i| {
            let room = (i % 3 == 0).then(|| format!("Room {}", i % 7));
            artwork(&format!("id{i}"), &format!("Work {i}"), &format!("https://x/{i}.jpg"), room.as_deref())
        })
        .collect();
    let gallery = Gallery { name: "Big".to_owned(), theme: Some(Theme::Dark), artworks };
    assert_eq!(decode(&encode(&gallery)), Some(gallery));
}

#[test]
fn round_trip_keeps_empty_room_distinct_from_absent_room() {
    let gallery = Gallery {
        name: "Rooms".to_owned(),
        theme: None,
        artworks: vec![artwork("a", "A", "u1", Some("")), artwork("b", "B", "u2", None)],
    };
    let decoded = decode(&encode(&gallery)).expect("decode");
    assert_eq!(decoded.artworks[0].room.as_deref(), Some(""));
    assert_eq!(decoded.artworks[1].room, None);
}

// =============================================================
// Token shape
// =============================================================

#[test]
fn encode_emits_only_standard_base64_alphabet() {
    let gallery = Gallery {
        name: "?>>~~ÿÿ".to_owned(),
        theme: None,
        artworks: vec![artwork("x", "ö?>", "https://x/?a=b&c=d", None)],
    };
    let token = encode(&gallery);
    assert!(!token.is_empty());
    assert!(
        token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=')
    );
    assert!(!token.contains('\n'));
}

#[test]
fn share_link_places_token_in_fragment() {
    let gallery = studio();
    let link = share_link("https://example.test/gallery/viewer", &gallery);
    assert_eq!(link, format!("https://example.test/gallery/viewer#{}", encode(&gallery)));
    assert_eq!(decode(fragment_of(&link)), Some(gallery));
}

#[test]
fn viewer_link_targets_viewer_route() {
    let gallery = studio();
    let link = viewer_link("https://example.test/", &gallery);
    assert_eq!(link, format!("https://example.test/gallery/viewer#{}", encode(&gallery)));
}

#[test]
fn fragment_of_returns_input_without_hash() {
    assert_eq!(fragment_of("abc"), "abc");
    assert_eq!(fragment_of("https://x/viewer#tok"), "tok");
    assert_eq!(fragment_of("#tok"), "tok");
}

// =============================================================
// Failure handling
// =============================================================

#[test]
fn decode_empty_and_bare_hash_is_none() {
    assert_eq!(decode(""), None);
    assert_eq!(decode("#"), None);
    assert!(matches!(try_decode_object("#"), Err(CodecError::Empty)));
}

#[test]
fn decode_strips_single_leading_hash() {
    let token = encode(&studio());
    assert_eq!(decode(&format!("#{token}")), decode(&token));
    assert_eq!(decode(&format!("##{token}")), None);
}

#[test]
fn decode_garbage_is_none() {
    assert_eq!(decode("not-valid-base64!!"), None);
    assert!(matches!(try_decode_object("not-valid-base64!!"), Err(CodecError::Base64(_))));
}

#[test]
fn decode_non_object_json_is_none() {
    assert_eq!(decode(&raw_token("42")), None);
    assert_eq!(decode(&raw_token("[1,2,3]")), None);
    assert_eq!(decode(&raw_token("null")), None);
    assert!(matches!(try_decode_object(&raw_token("\"str\"")), Err(CodecError::NotAnObject)));
}

#[test]
fn decode_invalid_utf8_is_none() {
    let token = TOKEN_ENGINE.encode([0xff_u8, 0xfe, 0x7b]);
    assert_eq!(decode(&token), None);
    assert!(matches!(try_decode_object(&token), Err(CodecError::Utf8(_))));
}

#[test]
fn decode_malformed_json_is_none() {
    let token = raw_token("{\"name\": ");
    assert_eq!(decode(&token), None);
    assert!(matches!(try_decode_object(&token), Err(CodecError::Json(_))));
}

#[test]
fn decode_is_total_over_arbitrary_strings() {
    let inputs = ["#", "##", "====", "a", "ab", "abc=", "🎨", " ", "#%%%", "e30", "e30=", "W10="];
    for input in inputs {
        let _ = decode(input);
    }
}

#[test]
fn decode_accepts_unpadded_token() {
    // "{}" encodes to "e30=".
    assert_eq!(decode("e30"), Some(Gallery::default()));
}

#[test]
fn decode_ignores_nonzero_trailing_bits() {
    // "e31=" carries "{}" plus two stray low bits in its last symbol.
    assert_eq!(decode("e31="), Some(Gallery::default()));
    assert_eq!(decode("e31"), Some(Gallery::default()));
}

#[test]
fn decode_keeps_object_missing_fields() {
    let decoded = decode(&raw_token(r#"{"name":"Only name"}"#)).expect("decode");
    assert_eq!(decoded.name, "Only name");
    assert!(decoded.artworks.is_empty());
    assert_eq!(decoded.theme, None);

    let obj = decode_object(&raw_token(r#"{"extra":true}"#)).expect("object");
    assert_eq!(obj.get("extra"), Some(&Value::Bool(true)));
}

// =============================================================
// Fragment source
// =============================================================

#[test]
fn decode_from_reads_current_fragment() {
    let source = FixedFragment(Some(format!("#{}", encode(&studio()))));
    assert_eq!(decode_from(&source), Some(studio()));
}

#[test]
fn decode_from_without_location_is_none() {
    assert_eq!(decode_from(&FixedFragment(None)), None);
    assert_eq!(decode_from(&FixedFragment(Some(String::new()))), None);
}
