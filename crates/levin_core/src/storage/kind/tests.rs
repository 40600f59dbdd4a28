use crate::storage::{ARRAY_FLAG, ValueKind};

#[test]
fn tags_match_wire_constants() {
	assert_eq!(ValueKind::Int64.tag(), 0x01);
	assert_eq!(ValueKind::UInt32.tag(), 0x06);
	assert_eq!(ValueKind::UInt8.tag(), 0x08);
	assert_eq!(ValueKind::Object.tag(), 0x0c);
	assert_eq!(ValueKind::Array.tag(), 0x0d);
	assert_eq!(ValueKind::UInt8.array_tag(), 0x88);
}

#[test]
fn from_tag_covers_known_range_only() {
	for tag in 0x01..=0x0d {
		let kind = ValueKind::from_tag(tag).expect("known tag maps to kind");
		assert_eq!(kind.tag(), tag);
	}
	assert_eq!(ValueKind::from_tag(0x00), None);
	assert_eq!(ValueKind::from_tag(0x0e), None);
	assert_eq!(ValueKind::from_tag(0x08 | ARRAY_FLAG), None);
}

#[test]
fn fixed_widths() {
	assert_eq!(ValueKind::Bool.fixed_width(), Some(1));
	assert_eq!(ValueKind::Int16.fixed_width(), Some(2));
	assert_eq!(ValueKind::UInt32.fixed_width(), Some(4));
	assert_eq!(ValueKind::Double.fixed_width(), Some(8));
	assert_eq!(ValueKind::String.fixed_width(), None);
	assert_eq!(ValueKind::Object.to_string(), "object");
}
