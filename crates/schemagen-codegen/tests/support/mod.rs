#![allow(dead_code)]

use quote::ToTokens;
use schemagen_core::schema::*;

/// Parses generated source and returns the items of its only module.
pub fn module(src: &str) -> syn::ItemMod {
    let file = syn::parse_file(src).expect("generated source parses");
    assert_eq!(file.items.len(), 1, "expected a single module");

    match file.items.into_iter().next() {
        Some(syn::Item::Mod(module)) => module,
        other => panic!("expected a module, got {other:?}"),
    }
}

fn items(module: &syn::ItemMod) -> &[syn::Item] {
    &module.content.as_ref().expect("inline module").1
}

fn tokens(t: impl ToTokens) -> String {
    t.to_token_stream().to_string().replace(' ', "")
}

/// Names of structs, consts, functions and type aliases, in order.
pub fn item_names(module: &syn::ItemMod) -> Vec<String> {
    items(module)
        .iter()
        .filter_map(|item| match item {
            syn::Item::Struct(item) => Some(item.ident.to_string()),
            syn::Item::Const(item) => Some(item.ident.to_string()),
            syn::Item::Fn(item) => Some(item.sig.ident.to_string()),
            syn::Item::Type(item) => Some(item.ident.to_string()),
            _ => None,
        })
        .collect()
}

/// `use` items, rendered without whitespace.
pub fn uses(module: &syn::ItemMod) -> Vec<String> {
    items(module)
        .iter()
        .filter_map(|item| match item {
            syn::Item::Use(item) => Some(tokens(&item.tree)),
            _ => None,
        })
        .collect()
}

/// `(name, type)` of each field of struct `name`.
pub fn fields(module: &syn::ItemMod, name: &str) -> Vec<(String, String)> {
    let item = items(module)
        .iter()
        .find_map(|item| match item {
            syn::Item::Struct(item) if item.ident == name => Some(item),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no struct `{name}`"));

    item.fields
        .iter()
        .map(|field| {
            let ident = field.ident.as_ref().expect("named field");
            (ident.to_string(), tokens(&field.ty))
        })
        .collect()
}

/// Field names of struct `name`.
pub fn field_names(module: &syn::ItemMod, name: &str) -> Vec<String> {
    fields(module, name).into_iter().map(|(name, _)| name).collect()
}

/// Methods of every inherent impl block for `name`.
pub fn methods(module: &syn::ItemMod, name: &str) -> Vec<String> {
    items(module)
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(item) if item.trait_.is_none() => Some(item),
            _ => None,
        })
        .filter(|item| match &*item.self_ty {
            syn::Type::Path(path) => path.path.segments.last().is_some_and(|s| s.ident == name),
            _ => false,
        })
        .flat_map(|item| &item.items)
        .filter_map(|item| match item {
            syn::ImplItem::Fn(item) => Some(item.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

/// The value of `const name`, rendered without whitespace.
pub fn const_value(module: &syn::ItemMod, name: &str) -> String {
    items(module)
        .iter()
        .find_map(|item| match item {
            syn::Item::Const(item) if item.ident == name => Some(tokens(&item.expr)),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no const `{name}`"))
}

pub struct Blog {
    pub schema: Schema,
    pub user: TableId,
    pub post: TableId,
    pub category: TableId,
}

/// Users writing posts, and self-nesting categories.
pub fn blog() -> Blog {
    let mut schema = Schema::new("blog");

    let user = schema.add_table(
        Table::new("user")
            .with_column(Column::new("id", Type::BigSerial).primary_key())
            .with_column(Column::new("email", Type::Text).not_null())
            .with_column(Column::new("name", Type::Text))
            .with_column(
                Column::new("updated_at", Type::TimestampTz).default_on(Event::Update, "NOW()"),
            )
            .with_constraint(Constraint::unique(["email"])),
    );
    let post = schema.add_table(
        Table::new("post")
            .with_column(Column::new("id", Type::BigSerial).primary_key())
            .with_column(Column::new("author_id", Type::BigInt).not_null())
            .with_column(Column::new("title", Type::Text).not_null())
            .with_column(Column::new("payload", Type::Jsonb)),
    );
    let category = schema.add_table(
        Table::new("category")
            .with_column(Column::new("id", Type::Integer).primary_key())
            .with_column(Column::new("parent_id", Type::Integer)),
    );

    schema.add_relationship(Relationship::many_to_one(
        RelationshipSide::new(post).columns(["author_id"]),
        RelationshipSide::new(user).columns(["id"]).name("author"),
    ));
    schema.add_relationship(Relationship::many_to_one(
        RelationshipSide::new(category).columns(["parent_id"]).name("children"),
        RelationshipSide::new(category).columns(["id"]).name("parent"),
    ));

    Blog {
        schema,
        user,
        post,
        category,
    }
}
