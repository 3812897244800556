use clap::Parser;
use std::path::PathBuf;

/// Generate a typed TypeScript client for a Hasura backend from schema
/// introspection and permission metadata.
#[derive(Debug, Parser)]
#[command(name = "hasura-codegen", version)]
pub struct Args {
    /// The Hasura GraphQL endpoint to introspect
    #[arg(long, env = "HASURA_ENDPOINT")]
    pub endpoint: String,
    /// A proxy GraphQL endpoint to introspect instead of the Hasura endpoint
    #[arg(long, env = "PROXY_ENDPOINT")]
    pub proxy_endpoint: Option<String>,
    /// Introspect through the proxy endpoint
    #[arg(long, env = "USE_PROXY")]
    pub use_proxy: bool,
    /// Path to the exported Hasura metadata JSON, required for correct
    /// required-insert-field computation
    #[arg(
        long,
        env = "HASURA_METADATA_PATH",
        default_value = "./hasura_metadata.json"
    )]
    pub metadata_path: PathBuf,
    /// The Hasura role the generated client runs under; must match the
    /// metadata's insert permissions
    #[arg(long, env = "HASURA_RUNTIME_ROLE", default_value = "server")]
    pub role: String,
    /// The directory the generated package is written to
    #[arg(short = 'o', long, default_value = "./generated")]
    pub output_dir: PathBuf,
    /// Add a header to the introspection request ("name: value")
    #[arg(short = 'H', long, value_parser, num_args = 0..)]
    header: Vec<String>,
    /// Log filter directives, overriding RUST_LOG
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Args {
    pub fn introspection_endpoint(&self) -> &str {
        match &self.proxy_endpoint {
            Some(proxy) if self.use_proxy => proxy,
            _ => &self.endpoint,
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header.iter().filter_map(|header| split_header(header))
    }
}

fn split_header(header: &str) -> Option<(&str, &str)> {
    header
        .split_once(':')
        .map(|(name, value)| (name.trim(), value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hasura-codegen").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn proxy_endpoint_is_only_used_when_requested() {
        let args = parse(&[
            "--endpoint",
            "https://hasura.example.com/v1/graphql",
            "--proxy-endpoint",
            "http://localhost:3000/graphql",
        ]);
        assert_eq!(
            args.introspection_endpoint(),
            "https://hasura.example.com/v1/graphql"
        );

        let args = parse(&[
            "--endpoint",
            "https://hasura.example.com/v1/graphql",
            "--proxy-endpoint",
            "http://localhost:3000/graphql",
            "--use-proxy",
        ]);
        assert_eq!(args.introspection_endpoint(), "http://localhost:3000/graphql");
    }

    #[test]
    fn headers_are_split_on_the_first_colon() {
        let args = parse(&[
            "--endpoint",
            "https://hasura.example.com/v1/graphql",
            "-H",
            "x-hasura-admin-secret: shhh",
            "-H",
            "not a header",
        ]);

        let headers: Vec<_> = args.headers().collect();
        assert_eq!(headers, vec![("x-hasura-admin-secret", "shhh")]);
    }
}
