mod api;
mod table;
