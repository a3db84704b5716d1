pub fn unknown_operator(name: &str) -> String {
    format!("Comparison operator `{}` does not exist.", name)
}

pub fn sql_mismatch(name: &str, sql: &str) -> String {
    format!(
        "SQL fragment `{}` does not belong to the `{}` operator.",
        sql, name
    )
}
