// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use http::header::COOKIE;
use http::{HeaderMap, HeaderValue};
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use trellis_client_state::{InMemoryCookieJar, LocaleStore};
use trellis_common_i18n::{resolve_from_cookie_header, Direction, LocaleCatalog};
use trellis_nav_core::{BreadcrumbResolver, IconName, NavigationTree, RouteTable};
use trellis_server_config::{load_config, load_config_with_file, LogFormat, LoggingConfig, ServerConfig};
use trellis_server_locale::{GateDecision, LocaleGate};

/// Trellis - admin dashboard navigation and locale tooling
#[derive(Parser, Debug)]
#[command(name = "trellis", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long, env = "TRELLIS_CONFIG")]
	config: Option<PathBuf>,

	/// Log level (overrides config)
	#[arg(short, long)]
	log_level: Option<String>,

	/// Output logs as JSON (overrides config)
	#[arg(long)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Resolve the breadcrumb trail for a URL path
	Breadcrumbs {
		path: String,

		/// Print the trail as JSON
		#[arg(long)]
		json: bool,
	},

	/// Print the navigation tree in sidebar order
	Nav {
		/// Print the sorted tree as JSON
		#[arg(long)]
		json: bool,
	},

	/// Inspect supported locales
	Locale {
		#[command(subcommand)]
		command: LocaleCommand,
	},

	/// Resolve an icon name, optionally mirrored for right-to-left layouts
	Icon {
		name: String,

		#[arg(long)]
		rtl: bool,
	},

	/// Run the locale gate against a simulated request
	Gate {
		path: String,

		/// Raw Cookie header of the request
		#[arg(long)]
		cookie: Option<String>,

		/// X-Forwarded-For header of the request
		#[arg(long)]
		forwarded_for: Option<String>,
	},

	/// Print the effective configuration as TOML
	Config,
}

#[derive(Subcommand, Debug)]
enum LocaleCommand {
	/// List enabled locales; the default is marked with `*`
	List,

	/// Resolve the locale carried by a Cookie header
	Resolve {
		#[arg(long)]
		cookie: Option<String>,
	},

	/// Switch locale through the client store and print the cookie it writes
	Set {
		code: String,

		/// Raw Cookie header to seed the store from
		#[arg(long)]
		cookie: Option<String>,
	},
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let config = match &args.config {
		Some(path) => load_config_with_file(path),
		None => load_config(),
	}
	.context("failed to load configuration")?;

	init_tracing(&config.logging, args.log_level.as_deref(), args.json_logs);
	debug!(environment = %config.environment, "starting trellis");

	match args.command {
		Command::Breadcrumbs { path, json } => breadcrumbs(&config, &path, json),
		Command::Nav { json } => nav(&config, json),
		Command::Locale { command } => locale(&config, command).await,
		Command::Icon { name, rtl } => icon(&name, rtl),
		Command::Gate {
			path,
			cookie,
			forwarded_for,
		} => gate(&config, &path, cookie.as_deref(), forwarded_for.as_deref()),
		Command::Config => {
			let rendered = toml::to_string_pretty(&config).context("failed to render configuration")?;
			print!("{rendered}");
			Ok(())
		}
	}
}

fn init_tracing(logging: &LoggingConfig, level: Option<&str>, json_logs: bool) {
	let directive = level.unwrap_or(&logging.level);
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
	let format = if json_logs { LogFormat::Json } else { logging.format };

	match format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

fn load_tree(config: &ServerConfig) -> Result<NavigationTree> {
	let Some(path) = &config.site.navigation_file else {
		return Ok(NavigationTree::admin_sidebar());
	};

	let json = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read navigation file {}", path.display()))?;
	let tree = NavigationTree::from_json(&json)
		.with_context(|| format!("invalid navigation file {}", path.display()))?;
	tree.validate()?;
	info!(path = %path.display(), nodes = tree.nodes().len(), "loaded navigation file");
	Ok(tree)
}

fn catalog(config: &ServerConfig) -> Result<Arc<LocaleCatalog>> {
	Ok(Arc::new(config.locale_catalog()?))
}

fn breadcrumbs(config: &ServerConfig, path: &str, json: bool) -> Result<()> {
	let tree = load_tree(config)?;
	let resolver = BreadcrumbResolver::new(&tree, RouteTable::admin_defaults(), config.site.resolver_config());
	let trail = resolver.resolve(path);

	if json {
		println!("{}", serde_json::to_string_pretty(&trail)?);
	} else {
		println!("{}", render::breadcrumb_line(&trail));
		print!("{}", render::breadcrumb_table(&trail));
	}
	Ok(())
}

fn nav(config: &ServerConfig, json: bool) -> Result<()> {
	let tree = load_tree(config)?.sorted();

	if json {
		println!("{}", serde_json::to_string_pretty(&tree)?);
	} else {
		print!("{}", render::navigation_outline(&tree.flatten_navigation()));
	}
	Ok(())
}

async fn locale(config: &ServerConfig, command: LocaleCommand) -> Result<()> {
	let catalog = catalog(config)?;
	let cookie_name = &config.locale.cookie_name;

	match command {
		LocaleCommand::List => {
			print!("{}", render::locale_table(&catalog));
		}
		LocaleCommand::Resolve { cookie } => {
			let resolved = resolve_from_cookie_header(&catalog, cookie.as_deref(), cookie_name);
			println!("locale:    {}", resolved.code());
			println!("direction: {}", resolved.direction());
			println!("source:    {}", resolved.source.as_str());
			if let Some(rejected) = &resolved.rejected {
				println!("rejected:  {rejected}");
			}
		}
		LocaleCommand::Set { code, cookie } => {
			let jar = InMemoryCookieJar::new();
			if let Some(value) = cookie
				.as_deref()
				.and_then(|header| trellis_common_i18n::cookie_value(header, cookie_name))
			{
				jar.set(cookie_name.as_str(), value);
			}
			let jar = Arc::new(jar);
			let options = config.locale.cookie_options(config.environment.is_production());
			let store = LocaleStore::from_cookie(catalog, jar.clone(), options);
			let before = store.snapshot();

			store
				.set_locale(&code)
				.await
				.with_context(|| format!("failed to switch locale to '{code}'"))?;

			let after = store.snapshot();
			println!("{} ({}) -> {} ({})", before.locale, before.direction, after.locale, after.direction);
			match jar.last_set_cookie() {
				Some(header) => println!("Set-Cookie: {header}"),
				None => println!("unchanged, no cookie written"),
			}
		}
	}
	Ok(())
}

fn icon(name: &str, rtl: bool) -> Result<()> {
	let icon: IconName = name.parse()?;
	let direction = if rtl { Direction::Rtl } else { Direction::Ltr };
	let shown = icon.for_direction(direction);

	if shown == icon {
		println!("{icon}");
	} else {
		println!("{icon} -> {shown} ({direction})");
	}
	Ok(())
}

fn gate(config: &ServerConfig, path: &str, cookie: Option<&str>, forwarded_for: Option<&str>) -> Result<()> {
	if !path.starts_with('/') {
		bail!("request path must start with '/', got '{path}'");
	}
	let gate = LocaleGate::new(catalog(config)?, config.gate_config());

	let mut headers = HeaderMap::new();
	if let Some(cookie) = cookie {
		headers.insert(COOKIE, HeaderValue::from_str(cookie).context("invalid Cookie header")?);
	}
	if let Some(client) = forwarded_for {
		headers.insert(
			"x-forwarded-for",
			HeaderValue::from_str(client).context("invalid X-Forwarded-For header")?,
		);
	}

	let decision = gate.evaluate(path, &headers)?;
	match &decision {
		GateDecision::Bypass => println!("bypass"),
		GateDecision::RateLimited { retry_after } => {
			println!("rate limited, retry after {}s", retry_after.as_secs())
		}
		GateDecision::Proceed(seeded) => {
			println!("locale {} (source: {})", seeded.locale, seeded.source.as_str());
			print!("{}", render::header_lines(&seeded.headers));
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn test_args_are_well_formed() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_parse_breadcrumbs() {
		let args = Args::try_parse_from(["trellis", "-l", "debug", "breadcrumbs", "/admin/users/42", "--json"]).unwrap();
		assert_eq!(args.log_level.as_deref(), Some("debug"));
		match args.command {
			Command::Breadcrumbs { path, json } => {
				assert_eq!(path, "/admin/users/42");
				assert!(json);
			}
			other => panic!("unexpected command {other:?}"),
		}
	}

	#[test]
	fn test_parse_locale_set() {
		let args = Args::try_parse_from(["trellis", "locale", "set", "ar", "--cookie", "trellis_locale=fr"]).unwrap();
		match args.command {
			Command::Locale {
				command: LocaleCommand::Set { code, cookie },
			} => {
				assert_eq!(code, "ar");
				assert_eq!(cookie.as_deref(), Some("trellis_locale=fr"));
			}
			other => panic!("unexpected command {other:?}"),
		}
	}

	#[test]
	fn test_subcommand_is_required() {
		assert!(Args::try_parse_from(["trellis", "--json-logs"]).is_err());
	}

	#[test]
	fn test_builtin_tree_without_navigation_file() {
		let tree = load_tree(&ServerConfig::default()).unwrap();
		assert_eq!(tree, NavigationTree::admin_sidebar());
	}

	#[test]
	fn test_navigation_file_with_unknown_icon_fails() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nav.json");
		std::fs::write(&path, r#"[{"id":"x","url":"/x","icon":"NoSuchIcon"}]"#).unwrap();

		let mut config = ServerConfig::default();
		config.site.navigation_file = Some(path);
		let err = load_tree(&config).unwrap_err();
		assert!(err.to_string().contains("invalid navigation file"));
	}
}
