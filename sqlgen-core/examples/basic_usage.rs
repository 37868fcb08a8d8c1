use sqlgen_core::{
    create_delete, create_insert, create_select, create_update, format_value, generate, Filter,
    JoinSpec, JoinType, Operator, QueryBuilder, QueryRequest,
};

fn main() {
    println!("=== sqlgen - Basic Usage Examples ===\n");

    // SELECT with a join, filter, ordering and limit
    let select_query = create_select("users")
        .add_columns(("users.name", "orders.total"))
        .add_join(JoinType::Inner, "orders", "user_id", "id")
        .add_where(format!("orders.total {} {}", Operator::GT, format_value("100")))
        .add_order_by("orders.total DESC")
        .add_limit(10);

    println!("1. SELECT:\n{}\n", select_query.build());

    // INSERT pairs each column with its value
    let insert_query = create_insert("users")
        .add_value("name", format_value("Ann"))
        .add_value("age", format_value("31"));

    println!("2. INSERT:\n{}\n", insert_query.build());

    // UPDATE
    let update_query = create_update("users")
        .add_set("status", format_value("active"))
        .add_where("id = 5");

    println!("3. UPDATE:\n{}\n", update_query.build());

    // DELETE
    let delete_query = create_delete("sessions").add_where("expires_at IS NULL");

    println!("4. DELETE:\n{}\n", delete_query.build());

    // Form-style assembly: only the filled-in fragments are used
    let request = QueryRequest::new("Users")
        .with_columns(["Name", "Age"])
        .with_filter(Filter::new("Age", Operator::GTE).with_value("18"))
        .with_join(JoinSpec::new("LEFT", "Profiles", "UserId", ""))
        .with_limit(5);

    println!("5. Assembled SELECT (incomplete join skipped):\n{}\n", generate("SELECT", &request));
    println!("6. Unknown kind:\n{}", generate("MERGE", &request));
}
