pub mod edmonds_karp;
