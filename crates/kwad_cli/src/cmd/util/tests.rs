use std::path::Path;

use super::output_path;

#[test]
fn output_path_trims_leading_separators() {
	let base = Path::new("out");
	assert_eq!(output_path(base, "/anim/hero.tex"), base.join("anim").join("hero.tex"));
	assert_eq!(output_path(base, "\\anim\\hero.tex"), base.join("anim").join("hero.tex"));
}

#[test]
fn output_path_ignores_relative_components() {
	let base = Path::new("out");
	assert_eq!(output_path(base, "../x/./y.bin"), base.join("x").join("y.bin"));
	assert_eq!(output_path(base, "a//b"), base.join("a").join("b"));
}
