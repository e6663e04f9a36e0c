//! Launcher that emits the toolkit call as page script
//!
//! The toolkit dispatches callbacks by looking up function names in the page
//! scope, so the bridge is simply to write the call into the page.

use serde::Serialize;
use std::io::Write;

use crate::error::{DeployerError, DeployerResult};
use crate::traits::AppletLauncher;
use crate::types::{AttributeSet, ParameterSet};

/// Toolkit entry point invoked by the generated script
pub const TOOLKIT_FUNCTION: &str = "deployJava.runApplet";

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> DeployerResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    // Keep values from closing an enclosing <script> element
    Ok(json.replace("</", "<\\/"))
}

/// Render `deployJava.runApplet(attributes, parameters, "version");`
pub fn render_script(
    attributes: &AttributeSet,
    parameters: &ParameterSet,
    minimum_version: &str,
    pretty: bool,
) -> DeployerResult<String> {
    Ok(format!(
        "{}({}, {}, {});\n",
        TOOLKIT_FUNCTION,
        to_json(attributes, pretty)?,
        to_json(parameters, pretty)?,
        to_json(minimum_version, false)?
    ))
}

/// Writes one script statement per launch
pub struct ScriptLauncher<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> ScriptLauncher<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    /// Emit compact single-line objects
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AppletLauncher for ScriptLauncher<W> {
    fn run_applet(
        &mut self,
        attributes: &AttributeSet,
        parameters: &ParameterSet,
        minimum_version: &str,
    ) -> DeployerResult<()> {
        let script = render_script(attributes, parameters, minimum_version, self.pretty)?;
        self.writer
            .write_all(script.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(DeployerError::launch)
    }
}
