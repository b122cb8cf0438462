pub mod omdb_server;
