//! Programs run against the bundled standard library.

use pretty_assertions::assert_eq;

use crate::common::{run_inline, stdout_of};

#[test]
fn test_list_helpers() {
    let source = "import std.sort
import std.maxElement
import std.fibonacci
import std.reverseList
import std.uniqueList
import std.contains
import std.indexOf

fun main() {
    var numbers = [5, 2, 9, 1, 5, 6]
    println(\"Sorted: \" + sort(numbers))
    println(\"Max: \" + maxElement(numbers))
    println(\"Fibonacci: \" + fibonacci(10))
    println(\"reversed: \" + reverseList(numbers))
    println(\"unique: \" + uniqueList(numbers))
    println(\"contains: \" + contains(numbers, 3))
    println(\"indexOf: \" + indexOf(numbers, 4))
}";
    assert_eq!(
        stdout_of(source),
        "Sorted: [1, 2, 5, 5, 6, 9]
Max: 9
Fibonacci: [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
reversed: [9, 6, 5, 5, 2, 1]
unique: [1, 2, 5, 6, 9]
contains: false
indexOf: -1
"
    );
}

#[test]
fn test_sort_is_in_place() {
    let source = "import std.sort
fun main() {
    var array = [3, 1, 2]
    sort(array)
    println(array)
}";
    assert_eq!(stdout_of(source), "[1, 2, 3]\n");
}

#[test]
fn test_string_helpers() {
    let source = "import std.sortString
import std.maxElement
import std.reverseList
import std.uniqueList
import std.contains
import std.indexOf
import std.upperCase
import std.lowerCase
import std.trim

fun main() {
    var str = \"hello world\"
    println(sortString(str))
    println(maxElement(str))
    println(reverseList(str))
    println(uniqueList(str))
    println(contains(str, \"d\"))
    println(indexOf(str, \"d\"))
    println(upperCase(\"Bagdaulet Seilov\"))
    println(lowerCase(\"Bagdaulet Seilov\"))
    println(\"[\" + trim(\"   padded  \") + \"]\")
}";
    assert_eq!(
        stdout_of(source),
        " dehllloorw
w
dlrow olleh
helo wrd
true
10
BAGDAULET SEILOV
bagdaulet seilov
[padded]
"
    );
}

#[test]
fn test_conversions() {
    let source = "import std.stringToList
import std.listToString
import std.sort

fun main() {
    println(stringToList(\"cab\"))
    println(sort(stringToList(\"cab\")))
    println(listToString([\"a\", 1, true]))
    println(\"ascii: \" + toNumber(\"a\"))
    println(\"string: \" + toString(49))
}";
    assert_eq!(
        stdout_of(source),
        "[c, a, b]\n[a, b, c]\na1true\nascii: 97\nstring: 1\n"
    );
}

#[test]
fn test_higher_order_with_alias() {
    let source = "import std.isEven
import std.filter as ok

fun dodo(x) {
    return x * 2
}

fun main() {
    var numbers = [1, 2, 5, 6]
    var ff = dodo
    println(\"squares: \" + map(numbers, ff))
    println(\"filtered: \" + ok(numbers, isEven))
}";
    assert_eq!(
        stdout_of(source),
        "squares: [2, 4, 10, 12]\nfiltered: [2, 6]\n"
    );
}

#[test]
fn test_counting_with_dictionary() {
    let source = "fun main() {
    var numbers = [1, 2, 5, 5, 6]
    var counts = <>
    for (i = 0; i < size(numbers); i = i + 1) {
        var key = \"\" + numbers[i]
        if (counts[key] == null) {
            counts[key] = 1
        } else {
            counts[key] = counts[key] + 1
        }
    }
    println(\"counts: \" + counts)
}";
    assert_eq!(stdout_of(source), "counts: {1=1, 2=1, 5=2, 6=1}\n");
}

#[test]
fn test_recursive_binary_search() {
    let source = "fun binarySearch(arr, target) {
    return binarySearchRec(arr, target, 0, size(arr) - 1)
}

fun binarySearchRec(arr, target, left, right) {
    if (left > right) {
        return -1
    }
    var mid = (left + right) / 2
    mid = mid - (mid % 1)
    if (arr[mid] == target) {
        return mid
    }
    if (arr[mid] > target) {
        return binarySearchRec(arr, target, left, mid - 1)
    }
    return binarySearchRec(arr, target, mid + 1, right)
}

fun main() {
    var array = [1, 2, 5, 5, 6, 9]
    println(binarySearch(array, 6))
    println(binarySearch(array, 7))
}";
    assert_eq!(stdout_of(source), "4\n-1\n");
}

#[test]
fn test_type_tags_compare_with_type_of() {
    let source = "fun dodo(x) { return x }
fun main() {
    println(typeOf(null) == NULL)
    println(typeOf(123) == NUMBER)
    println(typeOf(\"hi\") == STRING)
    println(typeOf(true) == BOOLEAN)
    println(typeOf([1, 2]) == ARRAY)
    println(typeOf( < >) == STRUCTURE)
    println(typeOf(dodo) == FUNCTION)
}";
    assert_eq!(stdout_of(source), "true\n".repeat(7));
}

#[test]
fn test_user_dictionary_fields() {
    let source = "fun main() {
    var user = <>
    user[\"name\"] = \"bagdaulet\"
    user[\"age\"] = 45
    user[\"contacts\"] = [\"phone\", \"phone 2\"]
    println(\"user name: \" + user.name)
    println(\"user age: \" + user[\"age\"])
    println(user)
    var key = \"city\"
    var map = <>
    map[key] = \"almaty\"
    println(\"user city: \" + map.city)
}";
    assert_eq!(
        stdout_of(source),
        "user name: bagdaulet
user age: 45
{name=bagdaulet, age=45, contacts=[phone, phone 2]}
user city: almaty
"
    );
}

#[test]
fn test_deep_recursion_completes() {
    let source = "fun count(n) {
    if (n == 0) {
        return 0
    }
    return 1 + count(n - 1)
}
fun main() { println(count(2000)) }";
    assert_eq!(stdout_of(source), "2000\n");
}

#[test]
fn test_output_before_failure_is_kept() {
    let result = run_inline("fun main() { println(\"before\") return 1 - [] }");
    assert!(!result.is_success());
    assert_eq!(result.stdout, "before\n");
}
