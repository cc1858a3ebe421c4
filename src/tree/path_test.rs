use super::*;

#[test]
fn plain_members_use_dot_access() {
	assert_eq!(child_path("$", &NodeKey::Member("user".into())), "$.user");
	assert_eq!(child_path("$.user", &NodeKey::Member("first_name".into())), "$.user.first_name");
	assert_eq!(child_path("$", &NodeKey::Member("x-id".into())), "$.x-id");
	assert_eq!(child_path("$", &NodeKey::Member("café".into())), "$.café");
}

#[test]
fn indices_use_brackets() {
	assert_eq!(child_path("$.b", &NodeKey::Index(0)), "$.b[0]");
	assert_eq!(child_path("$[2]", &NodeKey::Index(11)), "$[2][11]");
}

#[test]
fn odd_members_are_quoted() {
	assert_eq!(child_path("$", &NodeKey::Member("a.b".into())), "$['a.b']");
	assert_eq!(child_path("$", &NodeKey::Member(String::new())), "$['']");
	assert_eq!(child_path("$", &NodeKey::Member("first name".into())), "$['first name']");
	assert_eq!(child_path("$", &NodeKey::Member("it's".into())), r"$['it\'s']");
	assert_eq!(child_path("$", &NodeKey::Member(r"back\slash".into())), r"$['back\\slash']");
}

#[test]
fn member_named_root_is_not_the_root() {
	assert_eq!(child_path("$", &NodeKey::Member("root".into())), "$.root");
	assert_eq!(child_path("$.anything", &NodeKey::Root), "$");
}

#[test]
fn normalize_blank_is_none() {
	assert_eq!(normalize(""), None);
	assert_eq!(normalize("   \t"), None);
}

#[test]
fn normalize_prepends_root() {
	assert_eq!(normalize("user.name").as_deref(), Some("$.user.name"));
	assert_eq!(normalize("  user.name  ").as_deref(), Some("$.user.name"));
	assert_eq!(normalize("$.user").as_deref(), Some("$.user"));
	assert_eq!(normalize("$").as_deref(), Some("$"));
	assert_eq!(normalize("[0].id").as_deref(), Some("$[0].id"));
	assert_eq!(normalize("..id").as_deref(), Some("$..id"));
}
