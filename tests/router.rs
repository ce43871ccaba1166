use pathtrie::{MatchError, Params, Router};
use std::collections::HashMap;

#[test]
fn literal_round_trip() {
    let routes = [
        ("GET", "/"),
        ("GET", "/users"),
        ("POST", "/users"),
        ("PUT", "/users/all"),
        ("DELETE", "/users/all"),
        ("HEAD", "/health"),
        ("PATCH", "/settings/profile/email"),
        ("OPTIONS", "/settings"),
        ("get", "/users"),
    ];

    let mut router = Router::new();
    for (i, (method, path)) in routes.iter().enumerate() {
        router.handle(method, path, i);
    }

    for (i, (method, path)) in routes.iter().enumerate() {
        let matched = router.at(method, path).unwrap();
        assert_eq!(*matched.value, i, "{} {}", method, path);
        assert!(matched.params.is_empty());
    }
}

#[test]
fn verb_shortcuts() {
    let mut router = Router::new();
    router.get("/x", "get");
    router.post("/x", "post");
    router.put("/x", "put");
    router.delete("/x", "delete");
    router.head("/x", "head");
    router.patch("/x", "patch");

    for method in ["GET", "POST", "PUT", "DELETE", "HEAD", "PATCH"] {
        let value = *router.at(method, "/x").unwrap().value;
        assert_eq!(value.to_uppercase(), method);
    }

    assert_eq!(
        router.allowed("/x"),
        vec!["DELETE", "GET", "HEAD", "PATCH", "POST", "PUT"]
    );
}

#[test]
fn parameter_extraction() {
    let mut router = Router::new();
    router.get("/users/:id/posts/:postId", "post");

    let mut params: HashMap<String, String> = HashMap::new();
    let handler = router
        .lookup("GET", "/users/42/posts/7", &mut params)
        .unwrap();

    assert_eq!(*handler, "post");
    assert_eq!(params.len(), 2);
    assert_eq!(params["id"], "42");
    assert_eq!(params["postId"], "7");
}

#[test]
fn method_isolation() {
    let mut router = Router::new();
    router.get("/a", "a");

    assert!(router.at("GET", "/a").is_ok());
    assert_eq!(router.at("POST", "/a").unwrap_err(), MatchError::NotFound);
    assert_eq!(router.at("get", "/a").unwrap_err(), MatchError::NotFound);
    assert_eq!(router.allowed("/a"), vec!["GET"]);
}

#[test]
fn unknown_path_and_unknown_method_look_the_same() {
    let mut router = Router::new();
    router.get("/a", "a");

    assert_eq!(router.at("POST", "/a").unwrap_err(), router.at("GET", "/b").unwrap_err());
}

#[test]
fn literal_wins_over_param_in_either_order() {
    let orders = [
        [("/items/:id", "param"), ("/items/special", "literal")],
        [("/items/special", "literal"), ("/items/:id", "param")],
    ];

    for routes in orders {
        let mut router = Router::new();
        for (path, value) in routes {
            router.get(path, value);
        }

        let matched = router.at("GET", "/items/special").unwrap();
        assert_eq!(*matched.value, "literal", "{:?}", routes);
        assert!(matched.params.is_empty());

        let matched = router.at("GET", "/items/42").unwrap();
        assert_eq!(*matched.value, "param", "{:?}", routes);
        assert_eq!(matched.params.get("id"), Some("42"));

        let matched = router.at("GET", "/items/specials").unwrap();
        assert_eq!(*matched.value, "param", "{:?}", routes);
        assert_eq!(matched.params.get("id"), Some("specials"));
    }
}

#[test]
fn literal_branch_falls_back_to_param() {
    let mut router = Router::new();
    router.get("/items/special", "special");
    router.get("/items/:id/edit", "edit");

    let matched = router.at("GET", "/items/special/edit").unwrap();
    assert_eq!(*matched.value, "edit");
    assert_eq!(matched.params.get("id"), Some("special"));
}

#[test]
fn literal_path_method_miss_does_not_fall_back() {
    let mut router = Router::new();
    router.get("/items/special", "special");
    router.post("/items/:id", "update");

    // the literal node matches the path, so the method decides
    assert!(router.at("POST", "/items/special").is_err());
    assert!(router.at("POST", "/items/7").is_ok());
}

#[test]
fn literal_equal_to_param_name() {
    let mut router = Router::new();
    router.get("/users/:id", "param");
    router.get("/users/id", "literal");

    assert_eq!(*router.at("GET", "/users/id").unwrap().value, "literal");

    let matched = router.at("GET", "/users/:id").unwrap();
    assert_eq!(*matched.value, "param");
    assert_eq!(matched.params.get("id"), Some(":id"));
}

#[test]
fn re_registration_replaces() {
    let mut router = Router::new();
    router.handle("GET", "/x", "h1");
    router.handle("GET", "/x", "h2");

    assert_eq!(*router.at("GET", "/x").unwrap().value, "h2");
    assert_eq!(router.root().children().len(), 1);
    assert_eq!(router.allowed("/x"), vec!["GET"]);
}

#[test]
fn empty_router_matches_nothing() {
    let router: Router<()> = Router::new();

    for (method, path) in [
        ("GET", "/"),
        ("GET", "/users"),
        ("POST", "/users/1"),
        ("GET", ""),
        ("GET", "*"),
    ] {
        assert_eq!(router.at(method, path).unwrap_err(), MatchError::NotFound);
    }

    assert!(router.allowed("/").is_empty());
}

#[test]
fn partial_path_is_not_found() {
    let mut router = Router::new();
    router.get("/a", "a");
    router.get("/b/c", "c");

    assert!(router.at("GET", "/a/b").is_err());
    assert!(router.at("GET", "/b").is_err());
    assert!(router.at("GET", "/b/c/d").is_err());
    assert!(router.allowed("/b").is_empty());
}

#[test]
fn no_params_recorded_on_miss() {
    let mut router = Router::new();
    router.get("/users/:id/posts", "posts");

    let mut params = Params::new();
    assert!(router.lookup("GET", "/users/1/comments", &mut params).is_err());
    assert!(params.is_empty());

    // path matched, method did not
    let mut params = Params::new();
    assert!(router.lookup("POST", "/users/1/posts", &mut params).is_err());
    assert!(params.iter().eq(vec![("id", "1")]));
}

#[test]
fn deep_mixed_paths() {
    let pattern = "/a/:p1/b/:p2/c/:p3/d/:p4/e/:p5/f/:p6";
    let mut router = Router::new();
    router.get(pattern, "deep");
    router.get("/a/:p1/b/:p2/c/:p3/d/:p4/e/:p5/f/fixed", "fixed");

    let matched = router.at("GET", "/a/1/b/2/c/3/d/4/e/5/f/6").unwrap();
    assert_eq!(*matched.value, "deep");
    assert_eq!(
        matched.params.iter().collect::<Vec<_>>(),
        vec![("p1", "1"), ("p2", "2"), ("p3", "3"), ("p4", "4"), ("p5", "5"), ("p6", "6")]
    );

    let matched = router.at("GET", "/a/1/b/2/c/3/d/4/e/5/f/fixed").unwrap();
    assert_eq!(*matched.value, "fixed");
    assert_eq!(matched.params.len(), 5);

    assert!(router.at("GET", "/a/1/b/2/c/3/d/4/e/5/x/6").is_err());
    assert!(router.at("GET", "/a/1/b/2/c/3/d/4/e/5/f").is_err());
}

#[test]
fn many_segments() {
    let mut path = String::new();
    let mut request = String::new();
    for i in 0..32 {
        if i % 2 == 0 {
            path.push_str(&format!("/s{}", i));
            request.push_str(&format!("/s{}", i));
        } else {
            path.push_str(&format!("/:p{}", i));
            request.push_str(&format!("/v{}", i));
        }
    }

    let mut router = Router::new();
    router.get(&path, ());

    let matched = router.at("GET", &request).unwrap();
    assert_eq!(matched.params.len(), 16);
    assert_eq!(matched.params.get("p31"), Some("v31"));
}

#[test]
fn concurrent_matching() {
    let mut router = Router::new();
    for i in 0..100 {
        router.get(&format!("/items/{}", i), i);
    }
    router.get("/items/:id/detail", 1000);

    std::thread::scope(|s| {
        for t in 0..8 {
            let router = &router;
            s.spawn(move || {
                for i in 0..100 {
                    assert_eq!(*router.at("GET", &format!("/items/{}", i)).unwrap().value, i);

                    let path = format!("/items/{}/detail", t * 100 + i);
                    let matched = router.at("GET", &path).unwrap();
                    assert_eq!(*matched.value, 1000);
                    assert_eq!(matched.params.get("id"), Some((t * 100 + i).to_string().as_str()));
                }
            });
        }
    });
}
