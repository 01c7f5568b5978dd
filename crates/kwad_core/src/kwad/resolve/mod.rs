use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::kwad::resource::{Animation, Build, Model, Resource, ResourceKind, Surface, Texture};
use crate::kwad::{KwadError, Package, Result};

/// Alias that targets a resource of a given kind.
#[derive(Debug, Clone, Copy)]
pub struct NamedResource<'i, 'a> {
	/// Alias path.
	pub path: &'i str,
	/// Target resource table index.
	pub index: u32,
	/// Decoded resource.
	pub resource: &'a Resource,
}

/// Lookup index over a decoded package's resource and alias tables.
#[derive(Debug)]
pub struct ResourceIndex<'a> {
	package: &'a Package,
	paths: Vec<String>,
	by_path: HashMap<String, usize>,
	first_alias: HashMap<u32, usize>,
}

impl<'a> ResourceIndex<'a> {
	/// Build path and reverse-target indexes. The first alias in table order wins.
	pub fn build(package: &'a Package) -> Self {
		let paths: Vec<String> = package.aliases().iter().map(|alias| alias.path_str().into_owned()).collect();

		let mut by_path = HashMap::with_capacity(paths.len());
		let mut first_alias = HashMap::new();
		for (position, (path, alias)) in paths.iter().zip(package.aliases()).enumerate() {
			if let Entry::Vacant(slot) = by_path.entry(path.clone()) {
				slot.insert(position);
			}
			first_alias.entry(alias.resource_index).or_insert(position);
		}

		Self {
			package,
			paths,
			by_path,
			first_alias,
		}
	}

	/// Package this index was built from.
	pub fn package(&self) -> &'a Package {
		self.package
	}

	/// Decoded resource at `index`, or `None` if out of range or absent.
	pub fn resource_at(&self, index: u32) -> Option<&'a Resource> {
		self.package.resources().get(index as usize)?.as_ref()
	}

	/// Resource index named by the first alias whose path equals `path` exactly.
	pub fn alias_target(&self, path: &str) -> Option<u32> {
		let position = *self.by_path.get(path)?;
		Some(self.package.aliases()[position].resource_index)
	}

	/// Decoded resource named by `path`.
	pub fn resource_by_alias(&self, path: &str) -> Option<&'a Resource> {
		self.resource_at(self.alias_target(path)?)
	}

	/// Path of the first alias (table order) that targets `index`.
	pub fn alias_path_for(&self, index: u32) -> Option<&str> {
		let position = *self.first_alias.get(&index)?;
		Some(&self.paths[position])
	}

	/// Aliases whose target decoded to `kind`, in alias table order.
	pub fn aliases_of_kind(&self, kind: ResourceKind) -> Vec<NamedResource<'_, 'a>> {
		self.paths
			.iter()
			.zip(self.package.aliases())
			.filter_map(|(path, alias)| {
				let resource = self.resource_at(alias.resource_index)?;
				(resource.kind() == kind).then_some(NamedResource {
					path,
					index: alias.resource_index,
					resource,
				})
			})
			.collect()
	}

	/// Resource at `index` that must exist and be of `kind`.
	pub fn require(&self, index: u32, kind: ResourceKind) -> Result<&'a Resource> {
		let resource = self.resource_at(index).ok_or_else(|| KwadError::UnresolvedReference {
			reference: format!("{} resource #{index}", kind.as_str()),
		})?;
		if resource.kind() != kind {
			return Err(KwadError::ResourceKindMismatch {
				index,
				expected: kind.as_str(),
				got: resource.kind().as_str(),
			});
		}
		Ok(resource)
	}

	/// Texture at `index`.
	pub fn texture_at(&self, index: u32) -> Option<&'a Texture> {
		self.resource_at(index)?.as_texture()
	}

	/// Surface at `index`.
	pub fn surface_at(&self, index: u32) -> Option<&'a Surface> {
		self.resource_at(index)?.as_surface()
	}

	/// Model at `index`.
	pub fn model_at(&self, index: u32) -> Option<&'a Model> {
		self.resource_at(index)?.as_model()
	}

	/// Build at `index`.
	pub fn build_at(&self, index: u32) -> Option<&'a Build> {
		self.resource_at(index)?.as_build()
	}

	/// Animation at `index`.
	pub fn animation_at(&self, index: u32) -> Option<&'a Animation> {
		self.resource_at(index)?.as_animation()
	}
}
