//! Document builders for the three products.

pub const SERVER_NAMESPACE: &str = "http://www.hazelcast.com/schema/config";
pub const CLIENT_NAMESPACE: &str = "http://www.hazelcast.com/schema/client-config";
pub const JET_NAMESPACE: &str = "http://www.hazelcast.com/schema/jet-config";

/// Wrap `body` in `<root xmlns="namespace">`.
pub fn document(root: &str, namespace: &str, body: &str) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<{root} xmlns=\"{namespace}\">\n{body}\n</{root}>\n")
}

/// A server configuration document.
pub fn server(body: &str) -> String {
    document("hazelcast", SERVER_NAMESPACE, body)
}

/// A client configuration document.
pub fn client(body: &str) -> String {
    document("hazelcast-client", CLIENT_NAMESPACE, body)
}

/// A `<import resource="..."/>` directive.
pub fn import(resource: &str) -> String {
    format!("<import resource=\"{resource}\"/>")
}
