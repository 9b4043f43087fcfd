use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use mod_registry_lib::config::AppSettings;
use mod_registry_lib::core::{mod_config, mod_documentation};
use mod_registry_lib::utils::json::Json;
use mod_registry_lib::utils::logging::init_logging;
use mod_registry_lib::{InstallInfo, ModDescriptor, ModRegistry, RegistryError};
use std::process::ExitCode;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "mod-registry", version, about = "Manage locally installed proxy mods")]
struct Cli {
    /// Mods root directory (defaults to the configured one)
    #[arg(long, global = true)]
    root: Option<Utf8PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Show deprecation warnings and debug logs
    #[arg(long, global = true)]
    dev: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List installed mods
    List,
    /// Show one mod's descriptor
    Info { name: String },
    /// Install a mod folder from a module.json-shaped file
    Install {
        info_file: Utf8PathBuf,
        /// Folder name to use instead of the info's `name`
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a mod's files
    Uninstall { name: String },
    /// Allow the host to load a mod
    Enable { name: String },
    /// Stop the host from loading a mod
    Disable { name: String },
    /// Flip whether the host loads a mod
    Toggle { name: String },
    /// Auto-update settings
    AutoUpdate {
        #[command(subcommand)]
        action: AutoUpdateAction,
    },
    /// Show the reserved core-module table
    CoreModules,
    /// Print a mod's readme
    Readme { name: String },
}

#[derive(Subcommand, Debug)]
enum AutoUpdateAction {
    Enable { name: String },
    Disable { name: String },
    Toggle { name: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = AppSettings::load().unwrap_or_else(|e| {
        eprintln!("Falling back to default settings: {e}");
        AppSettings::default()
    });
    let dev_mode = cli.dev || settings.dev_mode;
    init_logging(dev_mode);

    let mut registry = ModRegistry::from_settings(&settings).with_dev_mode(dev_mode);
    if let Some(root) = cli.root.clone() {
        registry.root = root;
    }

    match run(&registry, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(registry: &ModRegistry, cli: &Cli) -> Result<(), RegistryError> {
    match &cli.command {
        Command::List => {
            let infos = registry.list_module_infos();
            if cli.json {
                println!("{}", Json::to_pretty_string(&infos)?);
            } else {
                infos.iter().for_each(print_summary);
            }
        }
        Command::Info { name } => {
            let info = registry.find_module(name)?;
            if cli.json {
                println!("{}", Json::to_pretty_string(&info)?);
            } else {
                print_details(&info);
            }
        }
        Command::Install { info_file, name } => {
            let text = std::fs::read_to_string(info_file)?;
            let install_info = InstallInfo::try_from(serde_json::from_str::<serde_json::Value>(&text)?)?;
            let folder = registry.install_module(&install_info, name.as_deref())?;
            println!("Installed into {folder}");
        }
        Command::Uninstall { name } => {
            let info = registry.find_module(name)?;
            if info.is_core_module {
                warn!("Removing core module {}", info.name);
            }
            registry.uninstall_module(&info)?;
            println!("Uninstalled {}", info.raw_name);
        }
        Command::Enable { name } => mod_config::enable_load(&registry.find_module(name)?)?,
        Command::Disable { name } => mod_config::disable_load(&registry.find_module(name)?)?,
        Command::Toggle { name } => mod_config::toggle_load(&registry.find_module(name)?)?,
        Command::AutoUpdate { action } => match action {
            AutoUpdateAction::Enable { name } => {
                mod_config::enable_auto_update(&registry.find_module(name)?)?
            }
            AutoUpdateAction::Disable { name } => {
                mod_config::disable_auto_update(&registry.find_module(name)?)?
            }
            AutoUpdateAction::Toggle { name } => {
                mod_config::toggle_auto_update(&registry.find_module(name)?)?
            }
        },
        Command::CoreModules => {
            if cli.json {
                println!("{}", Json::to_pretty_string(registry.core_modules())?);
            } else {
                for (name, url) in registry.core_modules().iter() {
                    println!("{name}\t{url}");
                }
            }
        }
        Command::Readme { name } => {
            println!("{}", mod_documentation::read_readme(&registry.find_module(name)?)?);
        }
    }
    Ok(())
}

fn print_summary(info: &ModDescriptor) {
    let state = if info.disabled { "disabled" } else { "enabled" };
    let core = if info.is_core_module { " [core]" } else { "" };
    println!(
        "{:<24} {:<10} {:<10} {:<8}{}",
        info.raw_name,
        info.version.as_deref().unwrap_or("-"),
        info.compatibility.to_string(),
        state,
        core
    );
}

fn print_details(info: &ModDescriptor) {
    println!("name:          {}", info.raw_name);
    println!("path:          {}", info.path);
    println!("type:          {}", info.mod_type);
    println!("compatibility: {}", info.compatibility);
    println!("version:       {}", info.version.as_deref().unwrap_or("-"));
    println!("author:        {}", info.author.as_deref().unwrap_or("-"));
    println!("keywords:      {}", info.keywords.join(", "));
    println!("dependencies:  {}", info.dependencies.join(", "));
    println!("conflicts:     {}", info.conflicts.join(", "));
    println!("disabled:      {}", info.disabled);
    println!("auto-update:   {}", !info.disable_auto_update);
    if let Some(readme) = &info.readme_path {
        println!("readme:        {readme}");
    }
}
