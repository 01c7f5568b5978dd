use std::fs;
use std::path::Path;

use crate::kwad::bytes::Cursor;
use crate::kwad::registry::{Dispatch, dispatch};
use crate::kwad::resource::{Resource, tag_label};
use crate::kwad::{AliasInfo, KwadError, PackageHeader, ResourceInfo, Result, Version};

/// Diagnostic for a resource whose decode failed and was downgraded to an absent slot.
#[derive(Debug)]
pub struct DecodeFailure {
	/// Resource table index.
	pub index: u32,
	/// Table type tag.
	pub tag: [u8; 4],
	/// Absolute offset the decode started at.
	pub offset: u32,
	/// Underlying error.
	pub error: KwadError,
}

/// Fully decoded package: tables plus index-aligned resource slots.
#[derive(Debug)]
pub struct Package {
	/// Parsed header.
	pub header: PackageHeader,
	resource_infos: Vec<ResourceInfo>,
	aliases: Vec<AliasInfo>,
	resources: Vec<Option<Resource>>,
	failures: Vec<DecodeFailure>,
}

impl Package {
	/// Read a package file from disk and decode it.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::decode(&bytes)
	}

	/// Decode a package from an in-memory buffer.
	///
	/// Header and table errors abort the decode. Errors inside an individual resource
	/// are recorded in [`Package::failures`] and leave that slot empty.
	pub fn decode(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);
		let header = PackageHeader::parse(&mut cursor)?;
		let version = header.version;

		let resource_infos = cursor.read_counted(|cursor| ResourceInfo::parse(cursor, version))?;
		let aliases = cursor.read_counted(AliasInfo::parse)?;

		let mut resources = Vec::with_capacity(resource_infos.len());
		let mut failures = Vec::new();
		for (index, info) in resource_infos.iter().enumerate() {
			let index = index as u32;
			match decode_resource(&mut cursor, info, version) {
				Ok(resource) => resources.push(resource),
				Err(error) => {
					tracing::warn!(
						index,
						tag = %tag_label(info.tag),
						offset = info.offset,
						%error,
						"resource decode failed"
					);
					failures.push(DecodeFailure {
						index,
						tag: info.tag,
						offset: info.offset,
						error,
					});
					resources.push(None);
				}
			}
		}

		Ok(Self {
			header,
			resource_infos,
			aliases,
			resources,
			failures,
		})
	}

	/// Container version.
	pub fn version(&self) -> Version {
		self.header.version
	}

	/// Resource table in file order.
	pub fn resource_infos(&self) -> &[ResourceInfo] {
		&self.resource_infos
	}

	/// Alias table in file order.
	pub fn aliases(&self) -> &[AliasInfo] {
		&self.aliases
	}

	/// Decoded resource slots, index-aligned with [`Package::resource_infos`].
	pub fn resources(&self) -> &[Option<Resource>] {
		&self.resources
	}

	/// Per-resource decode failures.
	pub fn failures(&self) -> &[DecodeFailure] {
		&self.failures
	}
}

fn decode_resource(cursor: &mut Cursor<'_>, info: &ResourceInfo, version: Version) -> Result<Option<Resource>> {
	match dispatch(info.tag, version) {
		Dispatch::Decode(_, decode) => {
			cursor.seek(info.offset as usize)?;
			decode(cursor).map(Some)
		}
		Dispatch::Skip(kind) => {
			tracing::debug!(tag = %tag_label(info.tag), offset = info.offset, kind = kind.as_str(), "skipping resource");
			Ok(None)
		}
		Dispatch::Unknown => {
			tracing::debug!(tag = %tag_label(info.tag), offset = info.offset, "no decoder for resource tag");
			Ok(None)
		}
	}
}
