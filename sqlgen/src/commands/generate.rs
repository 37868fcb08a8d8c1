//! Generate command - build a statement from command-line fragments

use anyhow::Result;
use sqlgen_core::{split_list, Filter, JoinSpec, QueryRequest};

use crate::GenerateArgs;

pub fn execute(args: &GenerateArgs) -> Result<()> {
    let request = to_request(args);
    let sql = super::render(&args.kind, &request)?;
    println!("{}", sql);
    Ok(())
}

/// Collect the flags into a request; partially filled filter and join
/// groups are passed on and left for assembly to discard.
pub(crate) fn to_request(args: &GenerateArgs) -> QueryRequest {
    let mut request = QueryRequest::new(args.table.as_str())
        .with_columns(split_list(&args.columns))
        .with_values(split_list(&args.values));

    if args.filter_column.is_some() || args.operator.is_some() {
        request = request.with_filter(Filter {
            column: args.filter_column.clone().unwrap_or_default(),
            operator: args.operator.clone().unwrap_or_default(),
            value: args.filter_value.clone(),
        });
    }

    if let Some(order_by) = &args.order_by {
        request = request.with_order_by(order_by.as_str());
    }

    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }

    let join_fields = [
        &args.join_type,
        &args.join_table,
        &args.join_column,
        &args.join_main_column,
    ];
    if join_fields.iter().any(|field| field.is_some()) {
        request = request.with_join(JoinSpec::new(
            args.join_type.clone().unwrap_or_default(),
            args.join_table.clone().unwrap_or_default(),
            args.join_column.clone().unwrap_or_default(),
            args.join_main_column.clone().unwrap_or_default(),
        ));
    }

    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlgen_core::generate;

    fn args(kind: &str, table: &str) -> GenerateArgs {
        GenerateArgs {
            kind: kind.to_string(),
            table: table.to_string(),
            ..GenerateArgs::default()
        }
    }

    #[test]
    fn test_lists_are_split_and_trimmed() {
        let mut input = args("INSERT", "Users");
        input.columns = "Name, Age".to_string();
        input.values = "Ann , 31".to_string();

        let request = to_request(&input);
        assert_eq!(request.columns, vec!["Name", "Age"]);
        assert_eq!(request.values, vec!["Ann", "31"]);
        assert_eq!(
            generate(&input.kind, &request),
            "INSERT INTO Users (Name, Age)\nVALUES ('Ann', 31);"
        );
    }

    #[test]
    fn test_filter_only_when_flagged() {
        let request = to_request(&args("SELECT", "Users"));
        assert!(request.filter.is_none());

        let mut input = args("SELECT", "Users");
        input.filter_column = Some("Email".to_string());
        input.operator = Some("IS NULL".to_string());
        let request = to_request(&input);
        assert_eq!(
            generate("SELECT", &request),
            "SELECT *\nFROM Users\nWHERE Email IS NULL;"
        );
    }

    #[test]
    fn test_partial_join_is_discarded_by_assembly() {
        let mut input = args("SELECT", "Users");
        input.join_type = Some("INNER".to_string());
        input.join_table = Some("Orders".to_string());

        let request = to_request(&input);
        assert!(request.join.is_some());
        assert_eq!(generate("SELECT", &request), "SELECT *\nFROM Users;");
    }

    #[test]
    fn test_full_join_flags() {
        let mut input = args("SELECT", "Users");
        input.join_type = Some("RIGHT".to_string());
        input.join_table = Some("Orders".to_string());
        input.join_column = Some("UserId".to_string());
        input.join_main_column = Some("Id".to_string());
        input.order_by = Some("Id DESC".to_string());

        let request = to_request(&input);
        assert_eq!(
            generate("SELECT", &request),
            "SELECT *\nFROM Users\nRIGHT JOIN Orders ON Orders.UserId = Users.Id\nORDER BY Id DESC;"
        );
    }
}
