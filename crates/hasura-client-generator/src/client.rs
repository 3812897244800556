use crate::{
    idents::{camel_case, pascal_case},
    types::ts_type,
    HEADER,
};
use hasura_schema_analyzer::{SchemaMetadata, TableMetadata};
use indoc::indoc;
use itertools::Itertools;

/// One emitted artifact, keyed by its logical file name. Writing it to disk
/// is the orchestrator's concern.
#[derive(Debug)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub contents: String,
}

/// Renders the client modules: the transport wrapper, the generic table
/// client and the per-table registry.
pub fn generate_client(metadata: &SchemaMetadata) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile {
            name: "base-client.ts",
            contents: format!("{HEADER}{BASE_CLIENT}"),
        },
        GeneratedFile {
            name: "table-client.ts",
            contents: format!("{HEADER}{TABLE_CLIENT}"),
        },
        GeneratedFile {
            name: "index.ts",
            contents: client_index(metadata),
        },
    ]
}

const BASE_CLIENT: &str = indoc! {r"
    import { GraphQLClient } from 'graphql-request';

    export class BaseClient {
      protected client: GraphQLClient;

      constructor(
        protected endpoint: string,
        protected headers?: Record<string, string>
      ) {
        this.client = new GraphQLClient(endpoint, { headers });
      }

      protected request<T>(query: string, variables?: any): Promise<T> {
        return this.client.request<T>(query, variables);
      }
    }
"};

/// The generic table client. Documents are built per call; only the clauses
/// actually supplied end up in the argument list, so an omitted option never
/// appears as a null-valued argument. The by-pk methods fail at call time on
/// tables without a primary key.
const TABLE_CLIENT: &str = indoc! {r#"
    import { BaseClient } from './base-client';
    import type { QueryOptions } from '../types/tables';

    export class TableClient<
      TSelect,
      TInsert extends Record<string, any> | undefined,
      TUpdate extends Record<string, any> | undefined,
      TPK
    > extends BaseClient {
      constructor(
        endpoint: string,
        private tableName: string,
        private selectFields: string[],
        private pk?: { name: string; type: string },
        public requiredInsertFields: string[] = [],
        headers?: Record<string, string>
      ) {
        super(endpoint, headers);
      }

      async query(options: QueryOptions = {}): Promise<TSelect[]> {
        const { limit, offset, filters, orderBy, distinctOn } = options;

        const where: any = {};
        if (filters) {
          for (const f of filters) {
            where[f.field] = { [`_${f.op}`]: f.value };
          }
        }

        const declarations: string[] = [];
        const args: string[] = [];
        if (limit !== undefined) {
          declarations.push('$limit: Int');
          args.push('limit: $limit');
        }
        if (offset !== undefined) {
          declarations.push('$offset: Int');
          args.push('offset: $offset');
        }
        if (filters?.length) {
          declarations.push(`$where: ${this.tableName}_bool_exp`);
          args.push('where: $where');
        }
        if (orderBy) {
          declarations.push(`$orderBy: [${this.tableName}_order_by!]`);
          args.push('order_by: $orderBy');
        }
        if (distinctOn?.length) {
          declarations.push(`$distinctOn: [${this.tableName}_select_column!]`);
          args.push('distinct_on: $distinctOn');
        }

        const query = `
          query ${declarations.length ? `(${declarations.join(', ')})` : ''} {
            ${this.tableName}${args.length ? `(${args.join(', ')})` : ''} {
              ${this.selectFields.join('\n')}
            }
          }
        `;

        const res = await this.request<any>(query, {
          limit,
          offset,
          where: filters?.length ? where : undefined,
          orderBy: orderBy ? [{ [orderBy.field]: orderBy.direction }] : undefined,
          distinctOn,
        });

        return res[this.tableName];
      }

      async queryByPk(id: TPK): Promise<TSelect | null> {
        if (!this.pk) {
          throw new Error(`No primary key for table ${this.tableName}`);
        }

        const query = `
          query ($id: ${this.pk.type}!) {
            ${this.tableName}_by_pk(${this.pk.name}: $id) {
              ${this.selectFields.join('\n')}
            }
          }
        `;

        const res = await this.request<any>(query, { id });
        return res[`${this.tableName}_by_pk`] ?? null;
      }

      async insert(data: TInsert): Promise<TSelect> {
        const query = `
          mutation ($object: ${this.tableName}_insert_input!) {
            insert_${this.tableName}_one(object: $object) {
              ${this.selectFields.join('\n')}
            }
          }
        `;

        const res = await this.request<any>(query, { object: data });
        return res[`insert_${this.tableName}_one`];
      }

      async updateByPk(id: TPK, set: TUpdate): Promise<TSelect> {
        if (!this.pk) {
          throw new Error(`No primary key for table ${this.tableName}`);
        }

        const query = `
          mutation ($id: ${this.pk.type}!, $set: ${this.tableName}_set_input!) {
            update_${this.tableName}_by_pk(
              pk_columns: { ${this.pk.name}: $id }
              _set: $set
            ) {
              ${this.selectFields.join('\n')}
            }
          }
        `;

        const res = await this.request<any>(query, { id, set });
        return res[`update_${this.tableName}_by_pk`];
      }

      async deleteByPk(id: TPK): Promise<TSelect> {
        if (!this.pk) {
          throw new Error(`No primary key for table ${this.tableName}`);
        }

        const query = `
          mutation ($id: ${this.pk.type}!) {
            delete_${this.tableName}_by_pk(${this.pk.name}: $id) {
              ${this.selectFields.join('\n')}
            }
          }
        `;

        const res = await this.request<any>(query, { id });
        return res[`delete_${this.tableName}_by_pk`];
      }
    }
"#};

fn client_index(metadata: &SchemaMetadata) -> String {
    let mut out = String::from(HEADER);
    out.push_str("import { TableClient } from './table-client';\n");

    for table in metadata.tables.values() {
        let type_name = pascal_case(&table.name);
        let mut names = vec![type_name.clone()];
        if table.insert_input.is_some() {
            names.push(format!("{type_name}InsertInput"));
        }
        if table.update_input.is_some() {
            names.push(format!("{type_name}UpdateInput"));
        }
        out.push_str(&format!(
            "import type {{ {} }} from '../types/tables';\n",
            names.join(", ")
        ));
    }

    out.push_str(indoc! {r"

        export interface ClientConfig {
          endpoint: string;
          headers?: Record<string, string>;
        }

        export class HasuraClient {
    "});

    for table in metadata.tables.values() {
        out.push_str(&format!(
            "  readonly {}: TableClient<{}>;\n",
            camel_case(&table.name),
            table_generics(table).join(", ")
        ));
    }

    out.push_str("\n  constructor(config: ClientConfig) {\n");
    out.push_str("    const { endpoint, headers } = config;\n");

    for table in metadata.tables.values() {
        out.push_str(&table_initializer(table));
    }

    out.push_str("  }\n}\n");

    out.push_str(indoc! {r"

        export function createClient(config: ClientConfig): HasuraClient {
          return new HasuraClient(config);
        }
    "});

    out
}

fn table_generics(table: &TableMetadata) -> Vec<String> {
    let type_name = pascal_case(&table.name);

    let insert = match &table.insert_input {
        Some(_) => format!("{type_name}InsertInput"),
        None => "undefined".to_owned(),
    };
    let update = match &table.update_input {
        Some(_) => format!("{type_name}UpdateInput"),
        None => "undefined".to_owned(),
    };
    let pk = match &table.primary_key {
        Some(pk) => ts_type(&pk.r#type).to_string(),
        None => "any".to_owned(),
    };

    vec![type_name, insert, update, pk]
}

fn table_initializer(table: &TableMetadata) -> String {
    let select_fields = table
        .fields
        .iter()
        .map(|field| format!("'{}'", field.name))
        .join(", ");

    let pk = match &table.primary_key {
        Some(pk) => format!("{{ name: '{}', type: '{}' }}", pk.name, pk.r#type),
        None => "undefined".to_owned(),
    };

    let required_fields = table
        .insert_input
        .iter()
        .flat_map(|input| &input.required_fields)
        .map(|field| format!("'{}'", field.name))
        .join(", ");

    let mut out = String::from("\n");
    out.push_str(&format!(
        "    this.{} = new TableClient(\n",
        camel_case(&table.name)
    ));
    out.push_str("      endpoint,\n");
    out.push_str(&format!("      '{}',\n", table.name));
    out.push_str(&format!("      [{select_fields}],\n"));
    out.push_str(&format!("      {pk},\n"));
    out.push_str(&format!("      [{required_fields}],\n"));
    out.push_str("      headers\n");
    out.push_str("    );\n");
    out
}
