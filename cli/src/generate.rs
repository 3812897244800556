use crate::{cli_input::Args, errors::CliError, fetch, output::report};
use hasura_client_generator::{generate_client, generate_types, GeneratedFile};
use hasura_schema_analyzer::analyze;
use indoc::indoc;
use std::{fs, path::PathBuf};
use tokio::runtime::Runtime;

pub(crate) fn generate(args: &Args) -> Result<(), CliError> {
    let endpoint = args.introspection_endpoint();
    let headers: Vec<_> = args.headers().collect();

    report::fetching(endpoint);
    let operation = fetch::introspect(endpoint, &headers);
    let (introspection, raw_schema) = Runtime::new().unwrap().block_on(operation)?;

    let permissions = hasura_metadata::read_insert_permissions_from_path(
        &args.metadata_path,
        &args.role,
    )?;

    let metadata = analyze(&introspection, &permissions)?;
    report::analyzed(metadata.tables.len());

    // Render everything before touching the output directory, so a failed
    // run cannot leave it half-generated.
    let mut files: Vec<(PathBuf, String)> = vec![
        (
            "schemas/schema.json".into(),
            serde_json::to_string_pretty(&raw_schema).unwrap(),
        ),
        ("types/tables.ts".into(), generate_types(&metadata)),
    ];

    for GeneratedFile { name, contents } in generate_client(&metadata) {
        files.push((PathBuf::from("client").join(name), contents));
    }

    files.push(("package.json".into(), package_json()));
    files.push(("index.ts".into(), PACKAGE_INDEX.to_owned()));
    files.push(("README.md".into(), README.to_owned()));

    let output_dir = &args.output_dir;
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(|source| CliError::Write {
            path: output_dir.clone(),
            source,
        })?;
    }

    for (relative_path, contents) in files {
        let path = output_dir.join(relative_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CliError::Write {
                path: parent.to_owned(),
                source,
            })?;
        }

        fs::write(&path, contents).map_err(|source| CliError::Write { path, source })?;
    }

    report::done(output_dir);

    Ok(())
}

fn package_json() -> String {
    let manifest = serde_json::json!({
        "name": "@generated/graphql-client",
        "version": "1.0.0",
        "description": "Auto-generated GraphQL client for Hasura",
        "main": "index.ts",
        "types": "index.ts",
        "dependencies": {
            "graphql": "^16.8.1",
            "graphql-request": "^7.4.0",
        },
        "devDependencies": {
            "typescript": "^5.2.2",
        },
    });

    serde_json::to_string_pretty(&manifest).unwrap()
}

const PACKAGE_INDEX: &str = indoc! {r"
    // AUTO-GENERATED FILE
    // DO NOT EDIT MANUALLY

    export * from './client';
    export * from './types/tables';
"};

const README: &str = indoc! {r#"
    # Auto-generated GraphQL client

    Typed client for a Hasura backend, generated by `hasura-codegen`.
    Do not edit by hand; re-run the generator instead.

    ## Usage

    ```typescript
    import { createClient } from './generated';

    const client = createClient({
      endpoint: 'http://localhost:3000/graphql',
    });

    const profiles = await client.profiles.query({ limit: 10 });
    const profile = await client.profiles.queryByPk(id);
    const created = await client.profiles.insert({ name: 'Ada' });
    await client.profiles.updateByPk(id, { name: 'Grace' });
    await client.profiles.deleteByPk(id);
    ```
"#};
