//! End-to-end encoding of catalogues into asset groups.

use std::fs;
use std::path::PathBuf;

use bgpack::catalogue::{builtin, DEFAULT_GROUP_NAME};
use bgpack::encode::{encode_group, group_len, INDEX_WIDTH, RECORD_HEADER_LEN};
use bgpack::{asset_line, to_hex, write_asset, BackgroundDefinition, Colour, LayerType, Palette};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

/// Walk the group header and return the offset of the first record.
fn records_offset(bytes: &[u8]) -> usize {
    let name_len = bytes[0] as usize;
    let mut pos = 1 + name_len;
    let palette_size = u16::from_be_bytes([bytes[pos], bytes[pos + 1]]) as usize;
    pos += 2 + palette_size * 4;
    assert_eq!(bytes[pos], INDEX_WIDTH);
    pos + 2
}

#[test]
fn builtin_catalogue_matches_reference_asset() {
    let group = encode_group(DEFAULT_GROUP_NAME, &builtin()).unwrap();
    let line = asset_line(group.name(), group.as_bytes());

    assert_eq!(line, fixture("builtin_background.txt"));
    assert_eq!(group.len(), 1067);
}

#[test]
fn two_entry_group_snapshot() {
    let catalogue = vec![
        BackgroundDefinition::solid("Solid Black", "#000000"),
        BackgroundDefinition::new("Smooth Vertical", LayerType::SmoothVertical, ["#000000", "#ffffff"]),
    ];
    let group = encode_group("Background", &catalogue).unwrap();

    insta::assert_snapshot!(
        to_hex(group.as_bytes()),
        @"0x0a4261636b67726f756e640002000000ffffffffff0202000100000000020b536f6c696420426c61636b0000000200000001030f536d6f6f746820566572746963616c00000001"
    );
}

#[test]
fn image_and_radial_snapshot() {
    let catalogue = vec![
        BackgroundDefinition::image("Rainbow"),
        BackgroundDefinition::new("Radial", LayerType::Radial, ["#ffffff", "#000000"]),
    ];
    let group = encode_group("G", &catalogue).unwrap();

    insta::assert_snapshot!(
        to_hex(group.as_bytes()),
        @"0x01470002ffffffff000000ff020200000000000001075261696e626f770002000000000b0652616469616c00000001"
    );
}

#[test]
fn records_follow_header_without_padding() {
    let catalogue = builtin();
    let group = encode_group(DEFAULT_GROUP_NAME, &catalogue).unwrap();
    let bytes = group.as_bytes();

    let mut pos = records_offset(bytes);
    assert_eq!(bytes[pos - 1] as usize, catalogue.len());

    for bg in &catalogue {
        let stops = u16::from_be_bytes([bytes[pos], bytes[pos + 1]]) as usize;
        assert_eq!(&bytes[pos + 2..pos + 6], &bg.layer.direction());
        assert_eq!(bytes[pos + 6], bg.layer.tag());
        let name_len = bytes[pos + 7] as usize;
        assert_eq!(&bytes[pos + 8..pos + 8 + name_len], bg.name.as_bytes());

        let payload = match bg.layer {
            LayerType::Image => 0,
            LayerType::Solid => stops.min(1),
            _ => stops,
        };
        pos += RECORD_HEADER_LEN + name_len + payload * 2;
    }

    assert_eq!(pos, bytes.len());
}

#[test]
fn total_length_equals_declared_sizes() {
    let mut catalogue = builtin();
    catalogue.push(BackgroundDefinition::image("Photo"));
    catalogue.push(BackgroundDefinition::new("Blank", LayerType::Solid, Vec::<&str>::new()));

    let palette = Palette::from_catalogue(&catalogue).unwrap();
    let group = encode_group("Mixed", &catalogue).unwrap();

    assert_eq!(group.len(), group_len("Mixed", &palette, &catalogue));
}

#[test]
fn equal_colours_share_an_index() {
    let catalogue = vec![
        BackgroundDefinition::new("Hex", LayerType::SmoothDown, ["#336699", "0x336699FF"]),
        BackgroundDefinition::new("Int", LayerType::PixelDown, [0x336699FFu32, 0xFFFFFFFF]),
    ];
    let group = encode_group("G", &catalogue).unwrap();
    let bytes = group.as_bytes();

    assert_eq!(group.palette_size(), 2);

    let first = records_offset(bytes);
    let payload = &bytes[first + RECORD_HEADER_LEN + 3..first + RECORD_HEADER_LEN + 7];
    assert_eq!(payload, &[0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn palette_order_is_first_occurrence() {
    let catalogue = vec![
        BackgroundDefinition::solid("One", "#aa0000"),
        BackgroundDefinition::new("Two", LayerType::SmoothUp, ["#00bb00", "#aa0000", "#0000cc"]),
    ];
    let palette = Palette::from_catalogue(&catalogue).unwrap();

    let indices: Vec<Option<u16>> = ["#aa0000", "#00bb00", "#0000cc"]
        .iter()
        .map(|hex| palette.index_of(Colour::from_hex(hex).unwrap()))
        .collect();
    assert_eq!(indices, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn encoding_is_deterministic() {
    let a = encode_group(DEFAULT_GROUP_NAME, &builtin()).unwrap();
    let b = encode_group(DEFAULT_GROUP_NAME, &builtin()).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn written_asset_matches_reference() {
    let dir = tempfile::tempdir().unwrap();
    let group = encode_group(DEFAULT_GROUP_NAME, &builtin()).unwrap();

    let path = write_asset(dir.path(), "background_ultimate_asset.txt", group.name(), group.as_bytes())
        .unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), fixture("builtin_background.txt"));
}
