pub mod bigquery_repository_impl;
