/// `user_profiles` → `UserProfiles`. Type names in the generated module.
pub(crate) fn pascal_case(table_name: &str) -> String {
    table_name
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// `user_profiles` → `userProfiles`. Accessor names on the generated
/// client.
pub(crate) fn camel_case(table_name: &str) -> String {
    let pascal = pascal_case(table_name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}
