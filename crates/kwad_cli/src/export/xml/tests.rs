use kwad::kwad::Affine3D;
use kwad::kwad::reconstruct::{AnimDef, AnimFrameDef, ColourTransform, ElementDef};

use super::{AnimsXml, BuildXml, FrameXml, SymbolXml, to_xml};

fn element(transform: Option<Affine3D>, colour: Option<ColourTransform>) -> ElementDef {
	ElementDef {
		symbol: "arm".to_owned(),
		symbol_hash: 100,
		frame: 1,
		folder_hash: 7,
		parent: "0".to_owned(),
		parent_hash: 0,
		transform,
		parent_transform: None,
		colour,
	}
}

#[test]
fn build_document_carries_frame_attributes() {
	let document = BuildXml {
		name: "hero".to_owned(),
		symbols: vec![SymbolXml {
			name: "arm".to_owned(),
			frames: vec![FrameXml {
				framenum: 0,
				duration: 1,
				image: "arm".to_owned(),
				w: 8,
				h: 4,
				x: 14.0,
				y: 22.5,
			}],
		}],
	};

	let xml = to_xml(&document).expect("serializes");
	assert!(xml.starts_with("<?xml"));
	assert!(xml.contains("<Build name=\"hero\">"));
	assert!(xml.contains("<Symbol name=\"arm\">"));
	for attribute in ["framenum=\"0\"", "duration=\"1\"", "image=\"arm\"", "w=\"8\"", "h=\"4\"", "x=\"14\"", "y=\"22.5\""] {
		assert!(xml.contains(attribute), "missing {attribute} in {xml}");
	}
}

#[test]
fn anim_document_emits_optional_attributes_only_when_present() {
	let placed = element(Some(Affine3D::IDENTITY), ColourTransform::from_parts(None, None));
	let tinted = element(None, ColourTransform::from_parts(None, Some(kwad::kwad::Colour::ZERO)));
	let anims = [AnimDef {
		name: "walk_E_".to_owned(),
		base_name: "walk".to_owned(),
		facing: Some(1),
		root: "hero".to_owned(),
		frame_rate: 30.0,
		frames: vec![AnimFrameDef {
			index: 0,
			events: vec!["step".to_owned()],
			elements: vec![placed, tinted],
		}],
	}];

	let xml = to_xml(&AnimsXml::from_defs(&anims)).expect("serializes");
	assert!(xml.contains("<Anims>"));
	assert!(xml.contains("name=\"walk_E_\""));
	assert!(xml.contains("numframes=\"1\""));
	assert!(xml.contains("framerate=\"30\""));
	assert!(xml.contains("<event name=\"step\"/>"));
	assert_eq!(xml.matches("<element ").count(), 2);
	assert_eq!(xml.matches("m_a=\"1\"").count(), 1);
	assert_eq!(xml.matches("colour=\"").count(), 1);
	assert!(!xml.contains("p_a="));
	assert!(xml.contains("colour=\"1 0 0 0 0 0 1 0 0 0 0 0 1 0 0 0 0 0 1 0 0 0 0 0 1\""));
}

fn attribute(xml: &str, name: &str) -> f32 {
	let key = format!(" {name}=\"");
	let start = xml.find(&key).unwrap_or_else(|| panic!("{name} missing in {xml}")) + key.len();
	let end = start + xml[start..].find('"').expect("closing quote");
	xml[start..end].parse().expect("attribute is a float")
}

#[test]
fn affine_attributes_round_trip_exactly() {
	let affine = Affine3D {
		columns: [[0.1, 1.0e-7, 0.0], [-0.3, 1.0 / 3.0, 0.0], [0.0, 0.0, 1.0], [123.456, -7.77, 0.0]],
	};
	let mut placed = element(Some(affine), None);
	placed.parent_transform = Some(affine);
	let anims = [AnimDef {
		name: "turn".to_owned(),
		base_name: "turn".to_owned(),
		facing: None,
		root: "arm".to_owned(),
		frame_rate: 24.0,
		frames: vec![AnimFrameDef {
			index: 0,
			events: Vec::new(),
			elements: vec![placed],
		}],
	}];

	let xml = to_xml(&AnimsXml::from_defs(&anims)).expect("serializes");
	let expected = [
		("a", affine.a()),
		("b", affine.b()),
		("c", affine.c()),
		("d", affine.d()),
		("tx", affine.tx()),
		("ty", affine.ty()),
	];
	for (term, value) in expected {
		for prefix in ["m", "p"] {
			let name = format!("{prefix}_{term}");
			assert_eq!(attribute(&xml, &name).to_bits(), value.to_bits(), "{name} lost precision");
		}
	}
}
