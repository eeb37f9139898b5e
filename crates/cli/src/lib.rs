//! # `anycopy-cli` Library Crate
//!
//! Argument definitions and command handlers for the `anycopy` binary. Each
//! generator subcommand drives one `ViewController` through a single
//! submission, the same state machine a form in a UI would use.

use anycopy::{
    providers::factory::{create_provider, ProviderConfig},
    ContentType, CopyTarget, Generator, GeneratorProfile, Phase, ViewController,
};
use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;
use tracing::{error, info};

// --- CLI Argument Structs ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub provider: ProviderArgs,
    #[command(subcommand)]
    pub command: Commands,
}

/// How to reach the generation service.
#[derive(Args, Debug)]
pub struct ProviderArgs {
    /// The provider kind: `invoke`, `gemini` or `local`.
    #[arg(long, global = true, env = "AI_PROVIDER", default_value = "invoke")]
    pub provider: String,
    #[arg(long, global = true, env = "AI_API_URL")]
    pub api_url: Option<String>,
    #[arg(long, global = true, env = "AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    #[arg(long, global = true, env = "AI_MODEL")]
    pub model: Option<String>,
}

impl ProviderArgs {
    fn to_config(&self) -> ProviderConfig {
        ProviderConfig {
            provider: self.provider.clone(),
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            model_name: self.model.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available generators
    List,
    /// Generate a blog post
    Blog(GenerateArgs),
    /// Generate three Instagram captions with hashtags
    Instagram(GenerateArgs),
    /// Generate YouTube titles, a description and tags
    Youtube(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// What the content is about.
    #[arg(long)]
    pub topic: String,
    /// Who the content is for. Defaults to a general audience.
    #[arg(long, default_value = "")]
    pub audience: String,
    /// The tone of voice. Blog posts accept professional, casual, friendly,
    /// authoritative or conversational.
    #[arg(long)]
    pub tone: Option<String>,
    /// Print only the text a copy action would produce, e.g. `post`,
    /// `caption:2`, `title:1`, `description` or `tags`.
    #[arg(long)]
    pub copy: Option<CopyTarget>,
}

// --- Public Entrypoint ---

/// The main entry point for the `anycopy` CLI.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => {
            print!("{}", list_generators());
            Ok(())
        }
        Commands::Blog(args) => handle_generate(ContentType::Blog, &cli.provider, args).await,
        Commands::Instagram(args) => {
            handle_generate(ContentType::InstagramCaption, &cli.provider, args).await
        }
        Commands::Youtube(args) => {
            handle_generate(ContentType::YouTubeMetadata, &cli.provider, args).await
        }
    }
}

// --- Command Handlers ---

/// The generator catalog as printable text.
pub fn list_generators() -> String {
    GeneratorProfile::all()
        .iter()
        .map(|profile| {
            format!(
                "{:<10} {}\n           {}\n           {}\n",
                profile.content_type.slug(),
                profile.title,
                profile.description,
                profile.features.join(" · ")
            )
        })
        .collect()
}

async fn handle_generate(
    content_type: ContentType,
    provider: &ProviderArgs,
    args: GenerateArgs,
) -> Result<()> {
    info!("Starting '{}' generation with args: {:?}", content_type.slug(), args);

    let mut controller = ViewController::new(Arc::new(build_generator(content_type, provider)?));
    let form = controller.form_mut();
    form.topic = args.topic;
    form.audience = args.audience;
    form.tone = args.tone;

    // Surface the precise reason a submission would be refused.
    controller.request().validate()?;

    let state = controller.submit().await;
    match state.phase() {
        Phase::Success => {}
        Phase::Failed => {
            let message = state.error.clone().unwrap_or_default();
            error!("Generation failed: {message}");
            bail!(message);
        }
        phase => bail!("Generation did not complete (state: {phase:?})"),
    }

    let output = match args.copy {
        Some(target) => controller
            .copy_text(target)
            .ok_or_else(|| anyhow!("Nothing to copy for {target:?} in this result"))?,
        None => controller
            .rendered()
            .ok_or_else(|| anyhow!("Generation finished without a result"))?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn build_generator(content_type: ContentType, provider: &ProviderArgs) -> Result<Generator> {
    let ai_provider = create_provider(&provider.to_config())
        .with_context(|| format!("Failed to configure provider '{}'", provider.provider))?;
    Ok(Generator::new(
        GeneratorProfile::builtin(content_type),
        ai_provider,
    ))
}
