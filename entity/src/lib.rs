pub mod thing;

/*
 A thing is only a name with timestamps. Rows are created by the web app and
 never updated or deleted, so updated_at always equals created_at today.
 */
