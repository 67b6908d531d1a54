use pretty_assertions::assert_eq;
use swiftmock::*;

fn string() -> TypeDescriptor {
    TypeDescriptor::scalar("String")
}

fn session_service() -> Type {
    Type::new("SessionService")
        .method(
            Method::func("login")
                .param(Parameter::new("user", string()))
                .param(Parameter::new("password", string()))
                .returns(TypeDescriptor::scalar("Bool"))
                .asynchronous()
                .throwing(),
        )
        .method(Method::func("logout").attribute("@MainActor"))
        .method(
            Method::func("fetch")
                .param(Parameter::new("id", TypeDescriptor::scalar("Int")))
                .param(
                    Parameter::new(
                        "completion",
                        TypeDescriptor::closure(
                            [TypeDescriptor::scalar("Result<User, Error>")],
                            TypeDescriptor::void(),
                        ),
                    )
                    .escaping(),
                ),
        )
        .method(
            Method::func("current").returns(TypeDescriptor::optional(TypeDescriptor::scalar(
                "SessionService",
            ))),
        )
}

#[test]
fn should_generate_complete_type_mock() {
    let config = Config::default();
    let mock = generate_type(&session_service(), &config).unwrap();

    assert_eq!(
        vec!["Login", "Logout", "Fetch", "Current"],
        mock.mock_names().collect::<Vec<_>>()
    );
    assert_eq!(
        vec![
            "var stubbedLoginError: Error?",
            "var invokedLogin = false",
            "var invokedLoginCount = 0",
            "var invokedLoginParameters: (user: String, password: String)?",
            "var invokedLoginParametersList = [(user: String, password: String)]()",
            "var stubbedLoginResult: Bool! = false",
            r#"let invokedLoginExpectation = XCTestExpectation(description: "\(#function) expectation")"#,
            "",
            "func login(user: String, password: String) async throws -> Bool {",
            "    defer { invokedLoginExpectation.fulfill() }",
            "    if let error = stubbedLoginError { throw error }",
            "    invokedLogin = true",
            "    invokedLoginCount += 1",
            "    invokedLoginParameters = (user, password)",
            "    invokedLoginParametersList.append((user, password))",
            "    return stubbedLoginResult",
            "}",
            "",
            "var invokedLogout = false",
            "var invokedLogoutCount = 0",
            r#"let invokedLogoutExpectation = XCTestExpectation(description: "\(#function) expectation")"#,
            "",
            "@MainActor",
            "func logout() {",
            "    defer { invokedLogoutExpectation.fulfill() }",
            "    invokedLogout = true",
            "    invokedLogoutCount += 1",
            "}",
            "",
            "var invokedFetch = false",
            "var invokedFetchCount = 0",
            "var invokedFetchParameters: (id: Int, completion: (Result<User, Error>) -> Void)?",
            "var invokedFetchParametersList = [(id: Int, completion: (Result<User, Error>) -> Void)]()",
            "var stubbedFetchCompletionResult: Result<User, Error>?",
            r#"let invokedFetchExpectation = XCTestExpectation(description: "\(#function) expectation")"#,
            "",
            "func fetch(id: Int, completion: @escaping (Result<User, Error>) -> Void) {",
            "    defer { invokedFetchExpectation.fulfill() }",
            "    invokedFetch = true",
            "    invokedFetchCount += 1",
            "    invokedFetchParameters = (id, completion)",
            "    invokedFetchParametersList.append((id, completion))",
            "    if let result = stubbedFetchCompletionResult { completion(result) }",
            "}",
            "",
            "var invokedCurrent = false",
            "var invokedCurrentCount = 0",
            "var stubbedCurrentResult: DefaultSessionServiceMock?",
            r#"let invokedCurrentExpectation = XCTestExpectation(description: "\(#function) expectation")"#,
            "",
            "func current() -> DefaultSessionServiceMock? {",
            "    defer { invokedCurrentExpectation.fulfill() }",
            "    invokedCurrent = true",
            "    invokedCurrentCount += 1",
            "    return stubbedCurrentResult",
            "}",
        ],
        mock.lines(&config)
    );
}

#[test]
fn generation_is_idempotent() {
    let config = Config::default();
    let types = [session_service(), Type::new("Empty")];

    let first = generate(&types, &config).unwrap();
    let second = generate(&types, &config).unwrap();

    assert_eq!(first, second);
    assert!(first[1].methods.is_empty());
    assert!(first[1].lines(&config).is_empty());
}

#[test]
fn should_apply_configuration() {
    let config = Config::default()
        .with_indent("\t")
        .with_expectation_type("TestExpectation")
        .with_default_value("User", "User.stub");
    let ty =
        Type::new("Profile").method(Method::func("me").returns(TypeDescriptor::scalar("User")));

    assert_eq!(
        vec![
            "var invokedMe = false",
            "var invokedMeCount = 0",
            "var stubbedMeResult: User! = User.stub",
            r#"let invokedMeExpectation = TestExpectation(description: "\(#function) expectation")"#,
            "",
            "func me() -> User {",
            "\tdefer { invokedMeExpectation.fulfill() }",
            "\tinvokedMe = true",
            "\tinvokedMeCount += 1",
            "\treturn stubbedMeResult",
            "}",
        ],
        generate_type(&ty, &config).unwrap().lines(&config)
    );
}

#[test]
fn method_blocks_render_independently() {
    let config = Config::default();
    let mock = generate_type(&session_service(), &config).unwrap();

    let joined: Vec<String> = mock
        .methods
        .iter()
        .map(|method| method.lines(&config))
        .collect::<Vec<_>>()
        .join(&String::new());

    assert_eq!(mock.lines(&config), joined);
}

#[test]
fn should_report_colliding_fields() {
    let config = Config::default();
    let ty = Type::new("Counter")
        .method(Method::func("foo"))
        .method(Method::func("fooCount"));

    let mock = generate_type(&ty, &config).unwrap();

    assert_eq!(vec!["Foo", "FooCount"], mock.mock_names().collect::<Vec<_>>());
    assert_eq!(vec!["invokedFooCount"], mock.colliding_fields());
    assert!(generate_type(&session_service(), &config)
        .unwrap()
        .colliding_fields()
        .is_empty());
}
