//! Rustdoc `implementors/<trait>.js` rendering.
//!
//! Produces the script rustdoc writes next to a trait page: a literal
//! `implementors` object followed by the `register_implementors` /
//! `pending_implementors` handoff the documentation viewer expects.

use crate::{ImplementorEntry, ImplementorRegistry, Result};


const PRELUDE: &str = "(function() {var implementors = {};\n";

const HANDOFF: &str = "
            if (window.register_implementors) {
                window.register_implementors(implementors);
            } else {
                window.pending_implementors = implementors;
            }
        
})()";

/// Renders `registry` as a rustdoc implementors script.
///
/// String literals are emitted in JSON form, which is also valid JS.
pub fn render_script(registry: &ImplementorRegistry) -> Result<String> {
	let mut out = String::with_capacity(PRELUDE.len() + HANDOFF.len() + registry.entry_count() * 512);
	out.push_str(PRELUDE);
	for (library, entries) in registry.iter() {
		out.push_str("implementors[");
		push_js_string(&mut out, library)?;
		out.push_str("] = [");
		for entry in entries {
			push_entry(&mut out, entry)?;
		}
		out.push_str("];\n");
	}
	out.push_str(HANDOFF);
	Ok(out)
}

fn push_entry(out: &mut String, entry: &ImplementorEntry) -> Result<()> {
	out.push_str("{text:");
	push_js_string(out, entry.text())?;
	out.push_str(",synthetic:");
	out.push_str(if entry.is_synthetic() { "true" } else { "false" });
	out.push_str(",types:[");
	for (i, ty) in entry.types().iter().enumerate() {
		if i > 0 {
			out.push(',');
		}
		push_js_string(out, ty)?;
	}
	out.push_str("]},");
	Ok(())
}

/// Appends `s` as a double-quoted string literal.
fn push_js_string(out: &mut String, s: &str) -> Result<()> {
	out.push_str(&serde_json::to_string(s)?);
	Ok(())
}
