use kwad::kwad::Affine3D;
use kwad::kwad::reconstruct::{AnimDef, ColourTransform, ElementDef};
use serde::Serialize;

use crate::error::{CliError, Result};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// Serialize `document` with an XML declaration and tab indentation.
pub fn to_xml<T: Serialize>(document: &T) -> Result<String> {
	let mut out = String::from(XML_DECLARATION);
	let mut serializer = quick_xml::se::Serializer::new(&mut out);
	serializer.indent('\t', 1);
	document
		.serialize(serializer)
		.map_err(|err| CliError::Xml { message: err.to_string() })?;
	out.push('\n');
	Ok(out)
}

/// `build.xml` root.
#[derive(Debug, Serialize)]
#[serde(rename = "Build")]
pub struct BuildXml {
	#[serde(rename = "@name")]
	pub name: String,
	#[serde(rename = "Symbol")]
	pub symbols: Vec<SymbolXml>,
}

/// One `<Symbol>`.
#[derive(Debug, Serialize)]
pub struct SymbolXml {
	#[serde(rename = "@name")]
	pub name: String,
	#[serde(rename = "Frame")]
	pub frames: Vec<FrameXml>,
}

/// One `<Frame>` of a symbol.
#[derive(Debug, Serialize)]
pub struct FrameXml {
	#[serde(rename = "@framenum")]
	pub framenum: u32,
	#[serde(rename = "@duration")]
	pub duration: u32,
	#[serde(rename = "@image")]
	pub image: String,
	#[serde(rename = "@w")]
	pub w: u32,
	#[serde(rename = "@h")]
	pub h: u32,
	#[serde(rename = "@x")]
	pub x: f32,
	#[serde(rename = "@y")]
	pub y: f32,
}

/// `anim.xml` root.
#[derive(Debug, Serialize)]
#[serde(rename = "Anims")]
pub struct AnimsXml {
	#[serde(rename = "anim")]
	pub anims: Vec<AnimXml>,
}

/// One `<anim>` clip.
#[derive(Debug, Serialize)]
pub struct AnimXml {
	#[serde(rename = "@name")]
	pub name: String,
	#[serde(rename = "@root")]
	pub root: String,
	#[serde(rename = "@numframes")]
	pub numframes: usize,
	#[serde(rename = "@framerate")]
	pub framerate: f32,
	#[serde(rename = "frame")]
	pub frames: Vec<AnimFrameXml>,
}

/// One `<frame>` of a clip.
#[derive(Debug, Serialize)]
pub struct AnimFrameXml {
	#[serde(rename = "@idx")]
	pub idx: u32,
	#[serde(rename = "event")]
	pub events: Vec<EventXml>,
	#[serde(rename = "element")]
	pub elements: Vec<ElementXml>,
}

/// Named event raised on a frame.
#[derive(Debug, Serialize)]
pub struct EventXml {
	#[serde(rename = "@name")]
	pub name: String,
}

/// One placed `<element>`.
#[derive(Debug, Default, Serialize)]
pub struct ElementXml {
	#[serde(rename = "@name")]
	pub name: String,
	#[serde(rename = "@frame")]
	pub frame: u32,
	#[serde(rename = "@folder")]
	pub folder: u32,
	#[serde(rename = "@parent")]
	pub parent: String,
	#[serde(rename = "@m_a", skip_serializing_if = "Option::is_none")]
	pub m_a: Option<f32>,
	#[serde(rename = "@m_b", skip_serializing_if = "Option::is_none")]
	pub m_b: Option<f32>,
	#[serde(rename = "@m_c", skip_serializing_if = "Option::is_none")]
	pub m_c: Option<f32>,
	#[serde(rename = "@m_d", skip_serializing_if = "Option::is_none")]
	pub m_d: Option<f32>,
	#[serde(rename = "@m_tx", skip_serializing_if = "Option::is_none")]
	pub m_tx: Option<f32>,
	#[serde(rename = "@m_ty", skip_serializing_if = "Option::is_none")]
	pub m_ty: Option<f32>,
	#[serde(rename = "@p_a", skip_serializing_if = "Option::is_none")]
	pub p_a: Option<f32>,
	#[serde(rename = "@p_b", skip_serializing_if = "Option::is_none")]
	pub p_b: Option<f32>,
	#[serde(rename = "@p_c", skip_serializing_if = "Option::is_none")]
	pub p_c: Option<f32>,
	#[serde(rename = "@p_d", skip_serializing_if = "Option::is_none")]
	pub p_d: Option<f32>,
	#[serde(rename = "@p_tx", skip_serializing_if = "Option::is_none")]
	pub p_tx: Option<f32>,
	#[serde(rename = "@p_ty", skip_serializing_if = "Option::is_none")]
	pub p_ty: Option<f32>,
	/// Row-major 5x5 colour matrix, space separated.
	#[serde(rename = "@colour", skip_serializing_if = "Option::is_none")]
	pub colour: Option<String>,
}

impl AnimsXml {
	pub fn from_defs(anims: &[AnimDef]) -> Self {
		Self {
			anims: anims.iter().map(AnimXml::from_def).collect(),
		}
	}
}

impl AnimXml {
	fn from_def(anim: &AnimDef) -> Self {
		Self {
			name: anim.name.clone(),
			root: anim.root.clone(),
			numframes: anim.frames.len(),
			framerate: anim.frame_rate,
			frames: anim
				.frames
				.iter()
				.map(|frame| AnimFrameXml {
					idx: frame.index,
					events: frame.events.iter().map(|name| EventXml { name: name.clone() }).collect(),
					elements: frame.elements.iter().map(ElementXml::from_def).collect(),
				})
				.collect(),
		}
	}
}

impl ElementXml {
	fn from_def(element: &ElementDef) -> Self {
		let [m_a, m_b, m_c, m_d, m_tx, m_ty] = affine_terms(element.transform);
		let [p_a, p_b, p_c, p_d, p_tx, p_ty] = affine_terms(element.parent_transform);
		Self {
			name: element.symbol.clone(),
			frame: element.frame,
			folder: element.folder_hash,
			parent: element.parent.clone(),
			m_a,
			m_b,
			m_c,
			m_d,
			m_tx,
			m_ty,
			p_a,
			p_b,
			p_c,
			p_d,
			p_tx,
			p_ty,
			colour: element.colour.as_ref().map(colour_matrix),
		}
	}
}

fn affine_terms(affine: Option<Affine3D>) -> [Option<f32>; 6] {
	match affine {
		Some(affine) => [affine.a(), affine.b(), affine.c(), affine.d(), affine.tx(), affine.ty()].map(Some),
		None => [None; 6],
	}
}

fn colour_matrix(colour: &ColourTransform) -> String {
	colour
		.matrix
		.iter()
		.flatten()
		.map(f32::to_string)
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests;
