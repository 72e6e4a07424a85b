//! New script scaffolding

use crate::error::{CatalogueError, CatalogueResult};

/// Name offered when the user has not typed one yet
pub const DEFAULT_SCRIPT_NAME: &str = "JebSampleScriptName";

/// JEB loads a script by matching its class name to the file name, so the
/// name must be a plain Python identifier made of letters and digits.
pub fn is_valid_script_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// File name the script has to be saved under
pub fn script_file_name(name: &str) -> String {
    format!("{name}.py")
}

/// Source of a new, empty JEB script class
pub fn render_script(name: &str) -> CatalogueResult<String> {
    if !is_valid_script_name(name) {
        return Err(CatalogueError::InvalidScriptName(name.to_string()));
    }

    Ok(format!(
        r#"# -*- coding: utf-8 -*-
from com.pnfsoftware.jeb.client.api import IScript
"""
Script for JEB Decompiler.
Note: This file must be saved as '{file}'
"""

class {name}(IScript):

	# ctx: IClientContext
	def run(self, ctx):
		pass
"#,
        file = script_file_name(name),
    ))
}
