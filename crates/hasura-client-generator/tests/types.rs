mod common;

use expect_test::expect;
use hasura_client_generator::generate_types;

#[test]
fn type_definitions_module() {
    let output = generate_types(&common::fixture());

    let expected = expect![[r#"
        // AUTO-GENERATED FILE
        // DO NOT EDIT MANUALLY

        export interface Filter {
          field: string;
          op: string;
          value: any;
        }

        export interface OrderBy {
          field: string;
          direction: 'asc' | 'desc';
        }

        export interface QueryOptions {
          limit?: number;
          offset?: number;
          filters?: Filter[];
          orderBy?: OrderBy;
          distinctOn?: string[];
        }

        export interface UserProfiles {
          id: string;
          name?: string;
          created_at: string;
        }

        export interface UserProfilesInsertInput {
          id?: string;
          name?: string;
          created_at?: string;
          org_id?: string;
        }

        export interface UserProfilesUpdateInput {
          name?: string;
        }

        export interface AuditLog {
          id: number;
          payload?: any;
        }
    "#]];

    expected.assert_eq(&output);
}

#[test]
fn defaulted_non_nullable_input_fields_render_optional() {
    let output = generate_types(&common::fixture());

    // `org_id` is NOT NULL; only its database default makes it omittable.
    assert!(output.contains("  org_id?: string;\n"));
}

#[test]
fn regeneration_is_deterministic() {
    let metadata = common::fixture();

    assert_eq!(generate_types(&metadata), generate_types(&metadata));
}
