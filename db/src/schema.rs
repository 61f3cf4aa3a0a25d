table! {
    questions (id) {
        id -> Int4,
        content -> Text,
        created_at -> Timestamptz,
    }
}
