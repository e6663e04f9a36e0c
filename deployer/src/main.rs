//! Deployer command line entry point
//!
//! Prints the toolkit launch call for a packaged applet so it can be pasted
//! or templated into the host page.

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use shared::config::RELAY_IDENTIFIER;
use shared::{DeploymentTarget, deploy_debug, deploy_warn, logging};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use deployer::{
    AppletLauncher, BaseUrlResolver, CallbackTable, CollisionPolicy, DeploymentBuilder,
    DirectoryBaseResolver, DocumentBaseResolver, JsonLauncher, ScriptLauncher,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Preset {
    /// RTSP multicast relay applet, embedded as `relay`
    Relay,
    /// Service launcher applet configured from --target or APPLET_* variables
    Launcher,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Script,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "deployer")]
#[command(about = "Generate the deployJava launch call for a packaged applet")]
struct Args {
    /// Deployment preset
    #[arg(long, value_enum, default_value = "launcher")]
    preset: Preset,

    /// JSON deployment target file (overrides the preset's constants)
    #[arg(long)]
    target: Option<PathBuf>,

    /// Cache version tag for the versioned archive
    #[arg(long)]
    cache_version: Option<String>,

    /// URL of the host page; defaults to the current directory as file://
    #[arg(long)]
    base_url: Option<String>,

    /// Descriptor path, relative to the host page
    #[arg(long)]
    descriptor: Option<String>,

    /// Applet element id and name
    #[arg(long)]
    id: Option<String>,

    /// Extra applet parameter, repeatable
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    params: Vec<(String, String)>,

    /// Page function called when the applet is ready
    #[arg(long)]
    on_ready: Option<String>,

    /// Page function called when the applet fails to start
    #[arg(long)]
    on_error: Option<String>,

    /// Page function called on failover
    #[arg(long)]
    on_failover: Option<String>,

    /// Let --param values replace reserved parameters
    #[arg(long)]
    allow_override: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "script")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

fn load_target(args: &Args) -> anyhow::Result<DeploymentTarget> {
    let mut target = match (&args.target, args.preset) {
        (Some(path), _) => DeploymentTarget::from_file(path)
            .with_context(|| format!("loading target {}", path.display()))?,
        (None, Preset::Relay) => {
            let cache_version = args
                .cache_version
                .clone()
                .context("--cache-version is required for the relay preset")?;
            DeploymentTarget::rtsp_multicast_relay(cache_version)
        }
        (None, Preset::Launcher) => {
            DeploymentTarget::from_env().context("loading target from APPLET_* variables")?
        }
    };

    if let Some(cache_version) = &args.cache_version {
        target = target.with_cache_version(cache_version.clone());
    }
    target.validate().context("validating deployment target")?;
    Ok(target)
}

fn identifier(args: &Args) -> anyhow::Result<String> {
    match args.preset {
        Preset::Relay => {
            if let Some(id) = args.id.as_deref().filter(|id| *id != RELAY_IDENTIFIER) {
                deploy_warn!(
                    RELAY_IDENTIFIER,
                    "Ignoring --id {}; the relay is always embedded as relay",
                    id
                );
            }
            if !args.params.is_empty() {
                bail!("the relay preset does not take --param values");
            }
            Ok(RELAY_IDENTIFIER.to_string())
        }
        Preset::Launcher => args.id.clone().context("--id is required for the launcher preset"),
    }
}

fn resolver(args: &Args) -> anyhow::Result<Box<dyn BaseUrlResolver>> {
    Ok(match &args.base_url {
        Some(base_url) => Box::new(DocumentBaseResolver::parse(base_url)?),
        None => Box::new(DirectoryBaseResolver::current_dir()?),
    })
}

fn run(args: &Args) -> anyhow::Result<()> {
    let target = load_target(args)?;
    let identifier = identifier(args)?;

    let policy = if args.allow_override {
        CollisionPolicy::AllowOverride
    } else {
        CollisionPolicy::Reject
    };
    let builder = DeploymentBuilder::new(target, resolver(args)?)?.with_policy(policy);

    logging::log_startup(&identifier, &builder.target().main_class);
    deploy_debug!(identifier, "Reserved parameter policy: {:?}", builder.policy());

    let mut callbacks = CallbackTable::new();
    if let Some(name) = &args.on_ready {
        callbacks = callbacks.with_ready(name.as_str());
    }
    if let Some(name) = &args.on_error {
        callbacks = callbacks.with_error(name.as_str());
    }
    if let Some(name) = &args.on_failover {
        callbacks = callbacks.with_failover(name.as_str());
    }

    let mut request = builder
        .request(identifier.as_str())
        .with_parameters(args.params.iter().cloned())
        .with_callbacks(callbacks);
    if let Some(descriptor) = &args.descriptor {
        request.descriptor_path = descriptor.clone();
    }

    let stdout = io::stdout().lock();
    let mut launcher: Box<dyn AppletLauncher> = match args.format {
        OutputFormat::Script => Box::new(ScriptLauncher::new(stdout)),
        OutputFormat::Json => Box::new(JsonLauncher::new(stdout)),
    };

    builder.build_and_launch(&request, &mut launcher)?;
    logging::log_success(&identifier, "Launch call written");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    let deployment = args.id.as_deref().unwrap_or("deployer");
    if report(deployment, run(&args)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Log a failed run once; the error is not handed back to the runtime
fn report(deployment: &str, result: anyhow::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            logging::log_error(deployment, "Deployment", &format!("{err:#}"));
            false
        }
    }
}
