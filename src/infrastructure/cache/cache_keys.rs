pub fn group_prefix(group_id: &str) -> String {
    format!("group_summary:{}:", group_id)
}

pub fn group_summary_key(group_id: &str, user_id: &str) -> String {
    format!("{}{}", group_prefix(group_id), user_id)
}
